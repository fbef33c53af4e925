//! Intake Use Case
//!
//! Drives one participant's intake session: reads archives through the
//! ArchiveReader port, merges offers into the session, and performs the
//! upload through an UploadGateway.

use std::sync::Arc;

use crate::domain::entities::{IntakeSession, OfferSummary};
use crate::domain::ports::{ArchiveReader, IntakeEvent, IntakeEventSink, UploadGateway};
use crate::domain::value_objects::{RequiredManifest, UploadDate};
use crate::error::{XdetexError, XdetexResult};

use super::offer::Offer;
use super::status::{progress_line, IntakeStatus};

/// What one offer did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferReport {
    pub summary: OfferSummary,
    pub archives_read: usize,
    pub unsupported: Vec<String>,
}

/// Intake use case
pub struct IntakeUseCase<R, E>
where
    R: ArchiveReader,
    E: IntakeEventSink,
{
    reader: R,
    events: E,
    session: IntakeSession,
    status: IntakeStatus,
    from_archive: bool,
}

impl<R, E> IntakeUseCase<R, E>
where
    R: ArchiveReader,
    E: IntakeEventSink,
{
    /// Wrap an existing session without contacting the backend
    pub fn new(reader: R, events: E, session: IntakeSession) -> Self {
        let status = match session.last_uploaded() {
            _ if !session.is_locked() => IntakeStatus::Idle,
            Some(date) => IntakeStatus::AlreadySubmitted {
                date: Some(date.display_date()),
            },
            None => IntakeStatus::AlreadySubmitted { date: None },
        };
        Self {
            reader,
            events,
            session,
            status,
            from_archive: false,
        }
    }

    /// Start a session, asking the backend whether the participant already
    /// submitted.
    ///
    /// A failed check is reported as a warning and the session starts empty.
    pub fn start<G: UploadGateway>(
        reader: R,
        events: E,
        gateway: &G,
        participant: &str,
        manifest: Arc<RequiredManifest>,
    ) -> Self {
        let session = match gateway.check_upload(participant) {
            Ok(check) if check.uploaded => IntakeSession::previously_submitted(
                participant,
                manifest,
                check.last_uploaded_date.as_deref().map(UploadDate::parse),
            ),
            Ok(_) => IntakeSession::new(participant, manifest),
            Err(e) => {
                events.on_event(IntakeEvent::UploadCheckFailed {
                    error: e.to_string(),
                });
                IntakeSession::new(participant, manifest)
            }
        };

        events.on_event(IntakeEvent::SessionStarted {
            participant: participant.to_string(),
            already_submitted: session.is_locked(),
        });

        Self::new(reader, events, session)
    }

    pub fn session(&self) -> &IntakeSession {
        &self.session
    }

    pub fn status(&self) -> &IntakeStatus {
        &self.status
    }

    /// Progress line for the current staged set
    pub fn progress(&self) -> String {
        progress_line(
            self.session.found_count(),
            self.session.manifest().len(),
            self.from_archive,
        )
    }

    /// Merge an offer into the session.
    ///
    /// Archives are read before anything is merged; if any archive is
    /// unreadable the session is left untouched.
    pub fn offer(&mut self, offer: Offer) -> XdetexResult<OfferReport> {
        if self.session.is_locked() {
            return Err(XdetexError::SessionLocked);
        }

        for name in &offer.unsupported {
            self.events.on_event(IntakeEvent::FileUnsupported { name: name.clone() });
        }

        let mut files = offer.files;
        let mut archive_extras = Vec::new();
        let archives_read = offer.archives.len();

        for archive in &offer.archives {
            let extraction = match self.reader.extract(&archive.bytes, self.session.manifest()) {
                Ok(extraction) => extraction,
                Err(e) => {
                    self.events.on_event(IntakeEvent::ArchiveRejected {
                        source: archive.source.clone(),
                        error: e.to_string(),
                    });
                    self.status = IntakeStatus::ArchiveUnreadable;
                    return Err(e);
                }
            };

            self.events.on_event(IntakeEvent::ArchiveRead {
                source: archive.source.clone(),
                entry_count: extraction.entry_count,
                matched: extraction.files.len(),
                extras: extraction.extras.len(),
            });
            files.extend(extraction.files);
            archive_extras.extend(extraction.extras);
        }

        let offered = files.len();
        let summary = self.session.offer(files, archive_extras)?;

        self.from_archive = archives_read > 0;
        self.status = IntakeStatus::after_offer(
            summary.found_count,
            summary.total,
            offered > 0,
            summary.added_nothing(),
            self.from_archive,
        );
        self.events.on_event(IntakeEvent::FilesOffered {
            offered,
            added: summary.added.clone(),
            found: summary.found_count,
            total: summary.total,
        });

        Ok(OfferReport {
            summary,
            archives_read,
            unsupported: offer.unsupported,
        })
    }

    /// Remove a staged file. Removing an unknown name is not an error.
    pub fn remove(&mut self, name: &str) -> XdetexResult<bool> {
        let removed = self.session.remove(name)?;
        if removed {
            self.events.on_event(IntakeEvent::FileRemoved {
                name: name.to_string(),
            });
        }

        self.from_archive = false;
        let found = self.session.found_count();
        let total = self.session.manifest().len();
        self.status = if self.session.ready_to_submit() {
            IntakeStatus::ReadyToSubmit {
                from_archive: false,
            }
        } else {
            IntakeStatus::FilesMissing {
                found,
                total,
                from_archive: false,
            }
        };
        Ok(removed)
    }

    /// Upload the staged files.
    ///
    /// Refuses with `IncompleteSubmission` (and no network call) while files
    /// are missing. A failed upload leaves every staged file in place.
    pub fn submit<G: UploadGateway>(&mut self, gateway: &G) -> XdetexResult<serde_json::Value> {
        let files = match self.session.begin_submit() {
            Ok(files) => files,
            Err(e) => {
                if let XdetexError::IncompleteSubmission { found, total, .. } = &e {
                    self.status = IntakeStatus::CannotSubmit {
                        found: *found,
                        total: *total,
                    };
                }
                return Err(e);
            }
        };

        self.status = IntakeStatus::Uploading;
        self.events.on_event(IntakeEvent::SubmitStarted {
            file_count: files.len(),
        });

        match gateway.upload(self.session.participant(), &files) {
            Ok(response) => {
                self.session.finish_submit(true);
                self.status = IntakeStatus::UploadSucceeded;
                self.events.on_event(IntakeEvent::SubmitCompleted {
                    file_count: files.len(),
                });
                Ok(response)
            }
            Err(e) => {
                self.session.finish_submit(false);
                self.status = IntakeStatus::UploadFailed;
                self.events.on_event(IntakeEvent::SubmitFailed {
                    error: e.to_string(),
                });
                Err(match e {
                    XdetexError::UploadFailed { .. } => e,
                    other => XdetexError::UploadFailed {
                        status: None,
                        message: other.to_string(),
                    },
                })
            }
        }
    }
}
