//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod hash;
pub mod manifest;
mod upload_date;

pub use hash::ContentHash;
pub use manifest::{RequiredFile, RequiredManifest};
pub use upload_date::UploadDate;
