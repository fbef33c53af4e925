//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod admin_gateway;
pub mod archive_reader;
pub mod intake_events;
pub mod upload_gateway;

pub use admin_gateway::{
    AdminGateway, EmailRound, Participant, ParticipantPage, ParticipantQuery, UserFiles,
};
pub use archive_reader::{ArchiveExtraction, ArchiveReader};
pub use intake_events::{IntakeEvent, IntakeEventSink, NoopEventSink};
pub use upload_gateway::{UploadCheck, UploadGateway};
