//! ArchiveReader port - abstraction over compressed archive formats
//!
//! Lets the intake use case pull required files out of an uploaded archive
//! without knowing about the ZIP format.

use crate::domain::entities::OfferedFile;
use crate::domain::value_objects::RequiredManifest;
use crate::error::XdetexResult;

/// Files pulled out of one archive
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveExtraction {
    /// One file per required name found, named by the bare manifest name
    pub files: Vec<OfferedFile>,
    /// Base names of file entries that matched no required name
    pub extras: Vec<String>,
    /// Number of file entries in the archive
    pub entry_count: usize,
}

/// Reads required files out of an in-memory archive
pub trait ArchiveReader {
    /// Extract required files from `archive`.
    ///
    /// Fails with `CorruptArchive` if the bytes are not a readable archive.
    fn extract(&self, archive: &[u8], manifest: &RequiredManifest)
        -> XdetexResult<ArchiveExtraction>;
}
