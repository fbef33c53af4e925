//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;
use std::sync::Arc;

use crate::application::{AdminUseCase, IntakeUseCase};
use crate::config::Config;
use crate::domain::entities::IntakeSession;
use crate::domain::ports::{IntakeEventSink, UploadGateway};
use crate::domain::value_objects::RequiredManifest;
use crate::error::XdetexResult;
use crate::infrastructure::{ConsoleEventSink, JsonEventSink, PortalClient, ZipArchiveReader};

/// Type alias for the concrete IntakeUseCase with all dependencies
pub type ConcreteIntakeUseCase = IntakeUseCase<ZipArchiveReader, Box<dyn IntakeEventSink>>;

/// Type alias for the concrete AdminUseCase
pub type ConcreteAdminUseCase = AdminUseCase<PortalClient>;

/// Event sink for the requested output mode
pub fn create_event_sink(json: bool, verbose: u8) -> Box<dyn IntakeEventSink> {
    if json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stderr(verbose))
    }
}

/// Portal client from the `[api]` section
pub fn create_portal_client(config: &Config) -> XdetexResult<PortalClient> {
    PortalClient::new(&config.http_settings())
}

/// Manifest from the `[manifest]` section
pub fn create_manifest(config: &Config, source: Option<&Path>) -> XdetexResult<Arc<RequiredManifest>> {
    let source = source.unwrap_or_else(|| Path::new("built-in defaults"));
    config.required_manifest(source).map(Arc::new)
}

/// Intake use case for a local check, without contacting the backend
pub fn create_local_intake(
    manifest: Arc<RequiredManifest>,
    events: Box<dyn IntakeEventSink>,
) -> ConcreteIntakeUseCase {
    IntakeUseCase::new(
        ZipArchiveReader::new(),
        events,
        IntakeSession::new("local", manifest),
    )
}

/// Intake use case for `participant`, after asking the backend whether
/// they already uploaded
pub fn create_intake_use_case<G: UploadGateway>(
    gateway: &G,
    participant: &str,
    manifest: Arc<RequiredManifest>,
    events: Box<dyn IntakeEventSink>,
) -> ConcreteIntakeUseCase {
    IntakeUseCase::start(
        ZipArchiveReader::new(),
        events,
        gateway,
        participant,
        manifest,
    )
}

/// Admin use case backed by the portal client
pub fn create_admin_use_case(config: &Config) -> XdetexResult<ConcreteAdminUseCase> {
    Ok(AdminUseCase::new(create_portal_client(config)?))
}
