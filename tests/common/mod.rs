//! Common test utilities for xdetex scenario and CLI tests.
//!
//! This module provides:
//! - `build_zip`: in-memory ZIP fixtures
//! - `RecordingGateway`: an UploadGateway that records every call
//! - `xdetex`: the CLI binary isolated from the caller's config
//! - `serve_once`: a one-request HTTP backend
//! - Fixtures: the default required file names and sample payloads

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::io::{Cursor, Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::process::Command;
use std::sync::Arc;
use std::thread;

use xdetex::domain::entities::AcceptedFile;
use xdetex::domain::ports::{UploadCheck, UploadGateway};
use xdetex::domain::value_objects::RequiredManifest;
use xdetex::{XdetexError, XdetexResult};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// The five default required names, in manifest order
pub const REQUIRED: [&str; 5] = [
    "time_spent_on_facebook.json",
    "your_comment_active_days.json",
    "facebook_reels_usage_information.json",
    "your_notifications_tab_activity.json",
    "your_facebook_watch_activity_in_the_last_28_days.json",
];

pub const PARTICIPANT: &str = "participant@example.com";

pub fn manifest() -> Arc<RequiredManifest> {
    Arc::new(RequiredManifest::facebook_export())
}

/// Small JSON body tagged with the file name so payloads are distinguishable
pub fn payload(name: &str) -> Vec<u8> {
    format!("{{\"file\":\"{}\"}}", name).into_bytes()
}

/// Build a ZIP in memory. Paths ending in `/` become directory entries.
pub fn build_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (path, body) in entries {
        if path.ends_with('/') {
            writer.add_directory(*path, options).unwrap();
        } else {
            writer.start_file(*path, options).unwrap();
            writer.write_all(body).unwrap();
        }
    }
    writer.finish().unwrap().into_inner()
}

/// A complete export laid out the way Facebook nests it
pub fn export_zip(extra: &[&str]) -> Vec<u8> {
    let manifest = RequiredManifest::facebook_export();
    let mut owned: Vec<(String, Vec<u8>)> = manifest
        .files()
        .iter()
        .map(|f| (format!("facebook-export/{}", f.export_path()), payload(f.name())))
        .collect();
    for path in extra {
        owned.push((path.to_string(), b"{}".to_vec()));
    }
    let borrowed: Vec<(&str, &[u8])> = owned
        .iter()
        .map(|(p, b)| (p.as_str(), b.as_slice()))
        .collect();
    build_zip(&borrowed)
}

/// UploadGateway fake that records uploads and can be told to fail
#[derive(Default)]
pub struct RecordingGateway {
    pub already_uploaded: Option<String>,
    pub fail_check: bool,
    pub fail_upload: Cell<bool>,
    pub checks: Cell<usize>,
    pub uploads: RefCell<Vec<Vec<String>>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.borrow().len()
    }
}

impl UploadGateway for RecordingGateway {
    fn check_upload(&self, _participant: &str) -> XdetexResult<UploadCheck> {
        self.checks.set(self.checks.get() + 1);
        if self.fail_check {
            return Err(XdetexError::Api {
                endpoint: "check-upload".to_string(),
                status: 503,
                message: "unavailable".to_string(),
            });
        }
        Ok(UploadCheck {
            uploaded: self.already_uploaded.is_some(),
            last_uploaded_date: self.already_uploaded.clone(),
        })
    }

    fn upload(&self, _participant: &str, files: &[AcceptedFile]) -> XdetexResult<serde_json::Value> {
        self.uploads
            .borrow_mut()
            .push(files.iter().map(|f| f.name().to_string()).collect());
        if self.fail_upload.get() {
            return Err(XdetexError::UploadFailed {
                status: Some(500),
                message: "Internal Server Error".to_string(),
            });
        }
        Ok(serde_json::json!({"message": "Files uploaded successfully"}))
    }
}

/// The xdetex binary run inside `dir` with no user config and no XDETEX_* overrides
pub fn xdetex(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_xdetex"));
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("XDETEX_API_BASE_URL")
        .env_remove("XDETEX_VERBOSITY")
        .env_remove("XDETEX_TIMEOUT_SECS");
    cmd
}

/// Answer exactly one HTTP request with `status` and a JSON `body`.
///
/// Returns the base URL and a handle yielding the request head.
pub fn serve_once(status: &'static str, body: &'static str) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut head = Vec::new();
        let mut byte = [0u8; 1];
        while !head.ends_with(b"\r\n\r\n") {
            if stream.read(&mut byte).unwrap() == 0 {
                break;
            }
            head.push(byte[0]);
        }
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        String::from_utf8_lossy(&head).to_string()
    });
    (format!("http://{}", addr), handle)
}

/// Parse NDJSON stdout into one value per line
pub fn ndjson(stdout: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("not JSON ({e}): {l}")))
        .collect()
}
