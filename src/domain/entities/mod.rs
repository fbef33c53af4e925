//! Domain Entities
//!
//! Core objects with identity: staged files and the intake session.

pub mod session;
pub mod staged_file;

pub use session::{IntakeSession, OfferSummary, SessionState};
pub use staged_file::{content_type_for, AcceptedFile, OfferedFile};
