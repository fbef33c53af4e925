//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `archive/` - ZIP archive reader
//! - `events/` - Event sinks (console, NDJSON)
//! - `fs/` - Local file selection and atomic writes
//! - `http/` - Portal backend client (upload and admin endpoints)

pub mod archive;
pub mod events;
pub mod fs;
pub mod http;

pub use archive::ZipArchiveReader;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
pub use http::{HttpSettings, PortalClient};
