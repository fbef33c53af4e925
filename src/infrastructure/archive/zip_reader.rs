//! ZIP Archive Reader
//!
//! Implements the ArchiveReader port with the `zip` crate. Entries are listed
//! from the central directory up front; payloads are only inflated for the
//! entries that match a required name.

use std::io::{Cursor, Read};

use zip::ZipArchive;

use crate::domain::entities::OfferedFile;
use crate::domain::ports::{ArchiveExtraction, ArchiveReader};
use crate::domain::value_objects::RequiredManifest;
use crate::error::{XdetexError, XdetexResult};

/// One entry of an opened archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    path: String,
    index: usize,
    is_dir: bool,
}

impl ArchiveEntry {
    /// Entry path with `\` normalized to `/`
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Final path segment, or the whole path if that segment is empty
    pub fn base_name(&self) -> &str {
        match self.path.rsplit('/').next() {
            Some(last) if !last.is_empty() => last,
            _ => &self.path,
        }
    }
}

/// An archive parsed from an in-memory buffer
pub struct OpenArchive<'a> {
    archive: ZipArchive<Cursor<&'a [u8]>>,
    entries: Vec<ArchiveEntry>,
    input_len: usize,
}

impl<'a> OpenArchive<'a> {
    /// Parse the central directory of `bytes`.
    pub fn open(bytes: &'a [u8]) -> XdetexResult<Self> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;

        let mut entries = Vec::with_capacity(archive.len());
        for index in 0..archive.len() {
            let raw = archive.by_index_raw(index)?;
            entries.push(ArchiveEntry {
                path: normalize_path(raw.name()),
                index,
                is_dir: raw.is_dir(),
            });
        }

        Ok(Self {
            archive,
            entries,
            input_len: bytes.len(),
        })
    }

    pub fn entries(&self) -> &[ArchiveEntry] {
        &self.entries
    }

    /// Inflate one entry.
    ///
    /// The size an entry claims is untrusted; preallocation never exceeds
    /// the archive's own length.
    pub fn read(&mut self, entry: &ArchiveEntry) -> XdetexResult<Vec<u8>> {
        let mut file = self.archive.by_index(entry.index)?;
        let claimed = usize::try_from(file.size()).unwrap_or(usize::MAX);
        let mut buf = Vec::with_capacity(claimed.min(self.input_len));
        file.read_to_end(&mut buf)
            .map_err(|e| XdetexError::CorruptArchive {
                message: format!("{}: {}", entry.path, e),
            })?;
        Ok(buf)
    }
}

/// ArchiveReader backed by the `zip` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipArchiveReader;

impl ZipArchiveReader {
    pub fn new() -> Self {
        Self
    }
}

impl ArchiveReader for ZipArchiveReader {
    fn extract(
        &self,
        archive: &[u8],
        manifest: &RequiredManifest,
    ) -> XdetexResult<ArchiveExtraction> {
        let mut opened = OpenArchive::open(archive)?;

        let files_only: Vec<ArchiveEntry> = opened
            .entries()
            .iter()
            .filter(|e| !e.is_dir())
            .cloned()
            .collect();

        // First entry per required name, in manifest order
        let mut matches: Vec<(&str, &ArchiveEntry)> = Vec::new();
        for name in manifest.names() {
            if let Some(entry) = files_only.iter().find(|e| e.path().ends_with(name)) {
                matches.push((name, entry));
            }
        }

        let mut files = Vec::with_capacity(matches.len());
        for (name, entry) in matches {
            let payload = opened.read(entry)?;
            files.push(OfferedFile::json(name, payload));
        }

        let mut extras: Vec<String> = Vec::new();
        for entry in &files_only {
            if manifest.match_suffix(entry.path()).is_some() {
                continue;
            }
            let base = entry.base_name();
            if !extras.iter().any(|e| e == base) {
                extras.push(base.to_string());
            }
        }

        Ok(ArchiveExtraction {
            files,
            extras,
            entry_count: files_only.len(),
        })
    }
}

fn normalize_path(raw: &str) -> String {
    raw.replace('\\', "/")
}
