//! JSON Event Sink
//!
//! Outputs intake events as NDJSON for scripting and automation.

use crate::domain::ports::{IntakeEvent, IntakeEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON object for one event. Shared with the CLI renderer.
pub fn event_to_json(event: &IntakeEvent) -> serde_json::Value {
    match event {
        IntakeEvent::SessionStarted {
            participant,
            already_submitted,
        } => serde_json::json!({
            "event": "start",
            "command": "intake",
            "participant": participant,
            "already_submitted": already_submitted,
        }),

        IntakeEvent::UploadCheckFailed { error } => serde_json::json!({
            "event": "warning",
            "command": "intake",
            "message": format!("could not check previous uploads: {}", error),
        }),

        IntakeEvent::ArchiveRead {
            source,
            entry_count,
            matched,
            extras,
        } => serde_json::json!({
            "event": "archive_read",
            "command": "intake",
            "source": source,
            "entries": entry_count,
            "matched": matched,
            "extras": extras,
        }),

        IntakeEvent::ArchiveRejected { source, error } => serde_json::json!({
            "event": "archive_rejected",
            "command": "intake",
            "source": source,
            "error": error,
        }),

        IntakeEvent::FileUnsupported { name } => serde_json::json!({
            "event": "item_skipped",
            "command": "intake",
            "name": name,
            "reason": "unsupported file type",
        }),

        IntakeEvent::FilesOffered {
            offered,
            added,
            found,
            total,
        } => serde_json::json!({
            "event": "offered",
            "command": "intake",
            "offered": offered,
            "added": added,
            "found": found,
            "total": total,
        }),

        IntakeEvent::FileRemoved { name } => serde_json::json!({
            "event": "item_removed",
            "command": "intake",
            "name": name,
        }),

        IntakeEvent::SubmitStarted { file_count } => serde_json::json!({
            "event": "submit_start",
            "command": "intake",
            "files": file_count,
        }),

        IntakeEvent::SubmitCompleted { file_count } => serde_json::json!({
            "event": "complete",
            "command": "intake",
            "status": "success",
            "files": file_count,
        }),

        IntakeEvent::SubmitFailed { error } => serde_json::json!({
            "event": "complete",
            "command": "intake",
            "status": "failed",
            "error": error,
        }),
    }
}

impl IntakeEventSink for JsonEventSink {
    fn on_event(&self, event: IntakeEvent) {
        self.write_event(event_to_json(&event));
    }
}
