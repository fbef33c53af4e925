//! Archive Readers
//!
//! Concrete implementations of the ArchiveReader port.

mod zip_reader;

pub use zip_reader::{ArchiveEntry, OpenArchive, ZipArchiveReader};
