//! Offered and accepted files
//!
//! Payloads are reference counted so merging never copies file contents.

use std::sync::Arc;

use crate::domain::value_objects::ContentHash;

/// Content type used for JSON payloads and archive extractions
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Content type used when the kind of payload is unknown
pub const BINARY_CONTENT_TYPE: &str = "application/octet-stream";

/// A candidate file introduced by the participant in one interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferedFile {
    name: String,
    payload: Arc<[u8]>,
    content_type: String,
}

impl OfferedFile {
    pub fn new(
        name: impl Into<String>,
        payload: impl Into<Arc<[u8]>>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            payload: payload.into(),
            content_type: content_type.into(),
        }
    }

    /// JSON file, the common case for both direct picks and archive entries
    pub fn json(name: impl Into<String>, payload: impl Into<Arc<[u8]>>) -> Self {
        Self::new(name, payload, JSON_CONTENT_TYPE)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A file staged in an intake session. The name is the identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedFile {
    name: String,
    payload: Arc<[u8]>,
    content_type: String,
}

impl AcceptedFile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn size(&self) -> usize {
        self.payload.len()
    }

    pub fn fingerprint(&self) -> ContentHash {
        ContentHash::from_bytes(&self.payload)
    }
}

impl From<OfferedFile> for AcceptedFile {
    fn from(offered: OfferedFile) -> Self {
        Self {
            name: offered.name,
            payload: offered.payload,
            content_type: offered.content_type,
        }
    }
}

/// Content type for a file name, judged by extension
pub fn content_type_for(name: &str) -> &'static str {
    if name.to_ascii_lowercase().ends_with(".json") {
        JSON_CONTENT_TYPE
    } else {
        BINARY_CONTENT_TYPE
    }
}
