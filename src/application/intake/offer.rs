//! Offer - one interaction's worth of selected files

use crate::domain::entities::{content_type_for, OfferedFile};

/// How a selected file is treated, judged by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    Archive,
    Json,
    Unsupported,
}

impl SelectionKind {
    pub fn of(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".zip") {
            SelectionKind::Archive
        } else if lower.ends_with(".json") {
            SelectionKind::Json
        } else {
            SelectionKind::Unsupported
        }
    }
}

/// Archive bytes plus a label for messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedArchive {
    pub source: String,
    pub bytes: Vec<u8>,
}

/// Files and archives selected together
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Offer {
    pub files: Vec<OfferedFile>,
    pub archives: Vec<NamedArchive>,
    pub unsupported: Vec<String>,
}

impl Offer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a selected file by its extension.
    pub fn add(&mut self, name: impl Into<String>, bytes: Vec<u8>) {
        let name = name.into();
        match SelectionKind::of(&name) {
            SelectionKind::Archive => self.archives.push(NamedArchive {
                source: name,
                bytes,
            }),
            SelectionKind::Json => {
                let content_type = content_type_for(&name);
                self.files.push(OfferedFile::new(name, bytes, content_type));
            }
            SelectionKind::Unsupported => self.unsupported.push(name),
        }
    }

    pub fn with(mut self, name: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.add(name, bytes);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.archives.is_empty() && self.unsupported.is_empty()
    }
}
