//! Console Event Sink
//!
//! Human-readable progress lines on stderr. Per-step lines only appear with
//! `-v`; warnings are always shown.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{IntakeEvent, IntakeEventSink};

/// Event sink that logs to stderr
pub struct ConsoleEventSink {
    verbose: u8,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stderr(verbose: u8) -> Self {
        Self {
            verbose,
            writer: Mutex::new(Box::new(io::stderr())),
        }
    }

    /// Console sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(verbose: u8, writer: W) -> Self {
        Self {
            verbose,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
        }
    }
}

impl IntakeEventSink for ConsoleEventSink {
    fn on_event(&self, event: IntakeEvent) {
        let text = match event {
            IntakeEvent::UploadCheckFailed { error } => {
                self.line(format!(
                    "[WARN] Could not check previous uploads: {}",
                    error
                ));
                return;
            }
            IntakeEvent::ArchiveRejected { source, error } => {
                self.line(format!("[WARN] {}: {}", source, error));
                return;
            }
            IntakeEvent::FileUnsupported { name } => {
                self.line(format!(
                    "[WARN] Skipping {} (only .json and .zip files are accepted)",
                    name
                ));
                return;
            }
            _ if self.verbose == 0 => return,
            IntakeEvent::SessionStarted {
                participant,
                already_submitted,
            } => {
                if already_submitted {
                    format!("[INFO] {} has already submitted", participant)
                } else {
                    format!("[INFO] Intake session started for {}", participant)
                }
            }
            IntakeEvent::ArchiveRead {
                source,
                entry_count,
                matched,
                extras,
            } => format!(
                "[INFO] {}: {} entries, {} required, {} other",
                source, entry_count, matched, extras
            ),
            IntakeEvent::FilesOffered {
                offered,
                added,
                found,
                total,
            } => {
                let mut text = format!(
                    "[INFO] Offered {} file(s), {} new, {}/{} required",
                    offered,
                    added.len(),
                    found,
                    total
                );
                if self.verbose > 1 && !added.is_empty() {
                    text.push_str(&format!(" (+ {})", added.join(", ")));
                }
                text
            }
            IntakeEvent::FileRemoved { name } => format!("[INFO] Removed {}", name),
            IntakeEvent::SubmitStarted { file_count } => {
                format!("[INFO] Uploading {} file(s)", file_count)
            }
            IntakeEvent::SubmitCompleted { file_count } => {
                format!("[INFO] Upload accepted ({} file(s))", file_count)
            }
            IntakeEvent::SubmitFailed { error } => format!("[INFO] Upload failed: {}", error),
        };
        self.line(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Shared(Arc<Mutex<Vec<u8>>>);

    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Shared {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn quiet_console_only_prints_warnings() {
        let out = Shared::default();
        let sink = ConsoleEventSink::with_writer(0, out.clone());

        sink.on_event(IntakeEvent::SubmitStarted { file_count: 5 });
        sink.on_event(IntakeEvent::FileUnsupported {
            name: "photo.png".to_string(),
        });

        assert_eq!(
            out.text(),
            "[WARN] Skipping photo.png (only .json and .zip files are accepted)\n"
        );
    }

    #[test]
    fn verbose_console_prints_progress() {
        let out = Shared::default();
        let sink = ConsoleEventSink::with_writer(2, out.clone());

        sink.on_event(IntakeEvent::FilesOffered {
            offered: 2,
            added: vec!["a.json".to_string()],
            found: 1,
            total: 5,
        });

        assert_eq!(
            out.text(),
            "[INFO] Offered 2 file(s), 1 new, 1/5 required (+ a.json)\n"
        );
    }
}
