//! Portal HTTP Client
//!
//! Blocking `reqwest` client for the portal backend. Implements both the
//! participant-facing UploadGateway and the AdminGateway.

use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, Response};
use reqwest::{StatusCode, Url};

use crate::domain::entities::AcceptedFile;
use crate::domain::ports::{
    AdminGateway, EmailRound, ParticipantPage, ParticipantQuery, UploadCheck, UploadGateway,
    UserFiles,
};
use crate::error::{XdetexError, XdetexResult};

const USER_AGENT: &str = concat!("xdetex/", env!("CARGO_PKG_VERSION"));

/// Connection settings for the portal backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

/// Client for every backend endpoint the portal uses
pub struct PortalClient {
    base_url: Url,
    http: Client,
}

impl PortalClient {
    /// Create a client rooted at `settings.base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL is rejected by [`parse_base_url`]
    /// or the HTTP client cannot be initialized.
    pub fn new(settings: &HttpSettings) -> XdetexResult<Self> {
        let base_url =
            parse_base_url(&settings.base_url).map_err(|message| XdetexError::InvalidBaseUrl {
                url: settings.base_url.clone(),
                message,
            })?;

        let http = Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Join percent-encoded path segments onto the base URL.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            path.extend(segments);
        }
        url
    }
}

/// Parse a portal base URL.
///
/// Only `http` and `https` URLs that can carry a path are accepted.
pub fn parse_base_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw.trim()).map_err(|e| e.to_string())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme '{}'", url.scheme()));
    }
    if url.cannot_be_a_base() {
        return Err("URL cannot carry a path".to_string());
    }
    Ok(url)
}

impl UploadGateway for PortalClient {
    fn check_upload(&self, participant: &str) -> XdetexResult<UploadCheck> {
        let url = self.endpoint(&["admin", "check-upload", participant]);
        let response = self.http.get(url).send()?;
        let response = expect_success("check-upload", response)?;
        Ok(response.json()?)
    }

    fn upload(&self, participant: &str, files: &[AcceptedFile]) -> XdetexResult<serde_json::Value> {
        let mut form = Form::new().text("email", participant.to_string());
        for file in files {
            let part = Part::bytes(file.payload().to_vec())
                .file_name(file.name().to_string())
                .mime_str(file.content_type())
                .map_err(|e| XdetexError::UploadFailed {
                    status: None,
                    message: format!("{}: {}", file.name(), e),
                })?;
            form = form.part("files", part);
        }

        let url = self.endpoint(&["upload", ""]);
        let response = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .map_err(|e| XdetexError::UploadFailed {
                status: None,
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().map_err(|e| XdetexError::UploadFailed {
            status: Some(status.as_u16()),
            message: format!("unable to read response body: {}", e),
        })?;
        if !status.is_success() {
            return Err(XdetexError::UploadFailed {
                status: Some(status.as_u16()),
                message: error_detail(&body),
            });
        }
        Ok(json_or_text(&body))
    }
}

impl AdminGateway for PortalClient {
    fn participants(&self, query: &ParticipantQuery) -> XdetexResult<ParticipantPage> {
        let mut url = self.endpoint(&["admin", "participants"]);
        url.query_pairs_mut()
            .append_pair("page", &query.page.to_string())
            .append_pair("page_size", &query.page_size.to_string())
            .append_pair("sort_by_status", &query.sort_by_status.to_string());

        let response = expect_success("participants", self.http.get(url).send()?)?;
        Ok(response.json()?)
    }

    fn user_files(&self, email: &str) -> XdetexResult<UserFiles> {
        let url = self.endpoint(&["admin", "files", email]);
        let response = self.http.get(url).send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(UserFiles {
                email: email.to_string(),
                uploaded_files: Vec::new(),
            });
        }
        let response = expect_success("files", response)?;
        Ok(response.json()?)
    }

    fn delete_all_files(&self, email: &str) -> XdetexResult<serde_json::Value> {
        let url = self.endpoint(&["admin", "files", email]);
        let response = expect_success("delete files", self.http.delete(url).send()?)?;
        Ok(json_or_text(&response.text()?))
    }

    fn delete_file(&self, email: &str, filename: &str) -> XdetexResult<serde_json::Value> {
        let url = self.endpoint(&["admin", "files", email, filename]);
        let response = expect_success("delete file", self.http.delete(url).send()?)?;
        Ok(json_or_text(&response.text()?))
    }

    fn download_all(&self) -> XdetexResult<Vec<u8>> {
        let url = self.endpoint(&["admin", "download", "all-files"]);
        let response = expect_success("download", self.http.get(url).send()?)?;
        Ok(response.bytes()?.to_vec())
    }

    fn send_round(&self, round: EmailRound) -> XdetexResult<serde_json::Value> {
        let segments: Vec<&str> = round.path().trim_start_matches('/').split('/').collect();
        let url = self.endpoint(&segments);
        let response = expect_success("send email", self.http.post(url).send()?)?;
        Ok(json_or_text(&response.text()?))
    }
}

fn expect_success(endpoint: &str, response: Response) -> XdetexResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .unwrap_or_else(|_| "unable to read response body".to_string());
    Err(XdetexError::Api {
        endpoint: endpoint.to_string(),
        status: status.as_u16(),
        message: error_detail(&body),
    })
}

/// Pull `detail` out of a JSON error body, otherwise return the body as is.
fn error_detail(body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| match v.get("detail") {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
            None => None,
        });

    match detail {
        Some(detail) => detail,
        None if body.trim().is_empty() => "empty response body".to_string(),
        None => body.trim().to_string(),
    }
}

fn json_or_text(body: &str) -> serde_json::Value {
    serde_json::from_str(body).unwrap_or_else(|_| serde_json::Value::String(body.to_string()))
}
