//! Error types for xdetex
//!
//! Library code returns `XdetexError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for xdetex operations
pub type XdetexResult<T> = Result<T, XdetexError>;

/// Main error type for xdetex operations
#[derive(Error, Debug)]
pub enum XdetexError {
    /// Archive bytes could not be parsed or an entry could not be inflated
    #[error("unable to read ZIP archive: {message}")]
    CorruptArchive { message: String },

    /// Submit attempted while required files are still missing
    #[error("cannot submit: {found}/{total} required files staged (missing: {})", .missing.join(", "))]
    IncompleteSubmission {
        found: usize,
        total: usize,
        missing: Vec<String>,
    },

    /// Backend rejected the upload or was unreachable
    #[error("upload failed{}: {message}", .status.map(|s| format!(" (HTTP {s})")).unwrap_or_default())]
    UploadFailed {
        status: Option<u16>,
        message: String,
    },

    /// Mutation attempted after a successful submission
    #[error("session already submitted; no further changes are accepted")]
    SessionLocked,

    /// A non-upload backend call returned an error status
    #[error("{endpoint} returned HTTP {status}: {message}")]
    Api {
        endpoint: String,
        status: u16,
        message: String,
    },

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API base URL cannot be used to build endpoint URLs
    #[error("invalid API base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    /// Invalid configuration file
    #[error("invalid configuration in {}: {message}", .file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl XdetexError {
    /// Whether the session can recover by retrying the same operation.
    pub fn is_retryable(&self) -> bool {
        matches!(self, XdetexError::UploadFailed { .. } | XdetexError::Http(_))
    }
}

impl From<zip::result::ZipError> for XdetexError {
    fn from(err: zip::result::ZipError) -> Self {
        XdetexError::CorruptArchive {
            message: err.to_string(),
        }
    }
}
