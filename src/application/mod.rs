//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `IntakeUseCase` - Participant flow: select, reconcile, submit
//! - `AdminUseCase` - Participant listing, file management, downloads, email rounds

pub mod admin;
pub mod intake;

pub use admin::{AdminUseCase, DeleteOutcome, ParticipantListing};
pub use intake::{IntakeStatus, IntakeUseCase, NamedArchive, Offer, OfferReport, SelectionKind};
