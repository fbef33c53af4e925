//! Local File System
//!
//! Reads the participant's selected files into an `Offer` and writes
//! downloaded archives atomically.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::application::intake::{Offer, SelectionKind};
use crate::error::{XdetexError, XdetexResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }

    /// Read every selected path into one offer, routed by extension.
    ///
    /// Unsupported files are recorded by name without being read.
    pub fn read_selection<P: AsRef<Path>>(&self, paths: &[P]) -> XdetexResult<Offer> {
        let mut offer = Offer::new();
        for path in paths {
            let path = path.as_ref();
            if path.is_dir() {
                return Err(XdetexError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("{} is a directory; select files or a ZIP archive", path.display()),
                )));
            }

            let name = display_name(path);
            if SelectionKind::of(&name) == SelectionKind::Unsupported {
                offer.unsupported.push(name);
                continue;
            }

            let bytes = std::fs::read(path).map_err(|e| {
                XdetexError::Io(std::io::Error::new(
                    e.kind(),
                    format!("{}: {}", path.display(), e),
                ))
            })?;
            offer.add(name, bytes);
        }
        Ok(offer)
    }

    /// Write `content` to `path` via a sibling temp file and rename.
    pub fn write_atomic(&self, path: &Path, content: &[u8]) -> XdetexResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(content)?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| XdetexError::Io(e.error))?;
        Ok(())
    }
}

/// File name used for matching against the manifest
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
