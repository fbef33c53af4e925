//! Intake Application Service
//!
//! Participant-side flow: select files, review missing/extra, submit.

mod offer;
mod status;
mod use_case;

pub use offer::{NamedArchive, Offer, SelectionKind};
pub use status::{progress_line, IntakeStatus};
pub use use_case::{IntakeUseCase, OfferReport};
