//! UploadGateway port - the participant-facing backend endpoints
//!
//! Covers the "already uploaded" check and the final multipart upload.

use serde::{Deserialize, Serialize};

use crate::domain::entities::AcceptedFile;
use crate::error::XdetexResult;

/// Answer of `GET /admin/check-upload/{email}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadCheck {
    #[serde(default)]
    pub uploaded: bool,
    #[serde(default)]
    pub last_uploaded_date: Option<String>,
}

/// Backend calls made by an intake session
pub trait UploadGateway {
    /// Whether the participant already completed a submission
    fn check_upload(&self, participant: &str) -> XdetexResult<UploadCheck>;

    /// Upload the staged files for `participant`.
    ///
    /// Any non-success answer is reported as `UploadFailed`.
    fn upload(&self, participant: &str, files: &[AcceptedFile]) -> XdetexResult<serde_json::Value>;
}

impl<G: UploadGateway + ?Sized> UploadGateway for &G {
    fn check_upload(&self, participant: &str) -> XdetexResult<UploadCheck> {
        (**self).check_upload(participant)
    }

    fn upload(&self, participant: &str, files: &[AcceptedFile]) -> XdetexResult<serde_json::Value> {
        (**self).upload(participant, files)
    }
}
