//! Intake Event Port
//!
//! Provides an observable interface for intake operations.
//! Enables verbose progress logging, JSON event streams, and debugging.

/// Event emitted during an intake session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeEvent {
    /// Session initialised
    SessionStarted {
        participant: String,
        already_submitted: bool,
    },

    /// The "already uploaded" check could not be completed
    UploadCheckFailed { error: String },

    /// An archive was read
    ArchiveRead {
        source: String,
        entry_count: usize,
        matched: usize,
        extras: usize,
    },

    /// An archive could not be read; the session is unchanged
    ArchiveRejected { source: String, error: String },

    /// A file was skipped because of its type
    FileUnsupported { name: String },

    /// Offered files were merged
    FilesOffered {
        offered: usize,
        added: Vec<String>,
        found: usize,
        total: usize,
    },

    /// A staged file was removed
    FileRemoved { name: String },

    /// Upload started
    SubmitStarted { file_count: usize },

    /// Upload accepted by the backend
    SubmitCompleted { file_count: usize },

    /// Upload failed; the session can retry
    SubmitFailed { error: String },
}

/// Trait for receiving intake events
///
/// Implementations can be:
/// - ConsoleEventSink: human-readable log lines on stderr
/// - JsonEventSink: NDJSON event stream for scripts
/// - NoopEventSink: Silent operation
pub trait IntakeEventSink {
    /// Handle an intake event
    fn on_event(&self, event: IntakeEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl IntakeEventSink for NoopEventSink {
    fn on_event(&self, _event: IntakeEvent) {}
}

impl<S: IntakeEventSink + ?Sized> IntakeEventSink for Box<S> {
    fn on_event(&self, event: IntakeEvent) {
        (**self).on_event(event)
    }
}
