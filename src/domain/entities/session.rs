//! Intake Session
//!
//! Holds one participant's staged files and the state machine around
//! submission:
//!
//! ```text
//! Empty -> PartiallyStaged <-> Ready -> Submitting -> Submitted
//!                  ^                         |
//!                  +------- (failure) -------+
//! ```
//!
//! The session performs no I/O. Archive extraction and the upload itself are
//! driven by `application::intake`, which calls `begin_submit` and then
//! `finish_submit` with the outcome.

use std::sync::Arc;

use crate::domain::entities::{AcceptedFile, OfferedFile};
use crate::domain::services::reconciler::{self, Reconciliation};
use crate::domain::value_objects::{RequiredManifest, UploadDate};
use crate::error::{XdetexError, XdetexResult};

/// Lifecycle state of an intake session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing staged
    Empty,
    /// Some files staged, at least one required file missing
    PartiallyStaged,
    /// Every required file staged
    Ready,
    /// Upload in flight
    Submitting,
    /// Upload accepted by the backend (terminal)
    Submitted,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Empty => "empty",
            SessionState::PartiallyStaged => "partially_staged",
            SessionState::Ready => "ready",
            SessionState::Submitting => "submitting",
            SessionState::Submitted => "submitted",
        }
    }
}

/// What one offer changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferSummary {
    pub added: Vec<String>,
    pub found_count: usize,
    pub total: usize,
}

impl OfferSummary {
    pub fn added_nothing(&self) -> bool {
        self.added.is_empty()
    }
}

/// One participant's upload flow
#[derive(Debug, Clone)]
pub struct IntakeSession {
    participant: String,
    manifest: Arc<RequiredManifest>,
    accepted: Vec<AcceptedFile>,
    missing: Vec<String>,
    extra: Vec<String>,
    archive_extras: Vec<String>,
    /// Every extra name in order of first appearance, from either source
    extra_order: Vec<String>,
    state: SessionState,
    resume_state: Option<SessionState>,
    last_uploaded: Option<UploadDate>,
}

impl IntakeSession {
    /// Fresh session with nothing staged
    pub fn new(participant: impl Into<String>, manifest: Arc<RequiredManifest>) -> Self {
        let missing = manifest.names().map(str::to_string).collect();
        Self {
            participant: participant.into(),
            manifest,
            accepted: Vec::new(),
            missing,
            extra: Vec::new(),
            archive_extras: Vec::new(),
            extra_order: Vec::new(),
            state: SessionState::Empty,
            resume_state: None,
            last_uploaded: None,
        }
    }

    /// Session for a participant the backend reports as already uploaded
    pub fn previously_submitted(
        participant: impl Into<String>,
        manifest: Arc<RequiredManifest>,
        last_uploaded: Option<UploadDate>,
    ) -> Self {
        let mut session = Self::new(participant, manifest);
        session.state = SessionState::Submitted;
        session.last_uploaded = last_uploaded;
        session
    }

    pub fn participant(&self) -> &str {
        &self.participant
    }

    pub fn manifest(&self) -> &RequiredManifest {
        &self.manifest
    }

    pub fn accepted(&self) -> &[AcceptedFile] {
        &self.accepted
    }

    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    pub fn extra(&self) -> &[String] {
        &self.extra
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn last_uploaded(&self) -> Option<&UploadDate> {
        self.last_uploaded.as_ref()
    }

    pub fn ready_to_submit(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn found_count(&self) -> usize {
        self.manifest.len() - self.missing.len()
    }

    pub fn is_locked(&self) -> bool {
        matches!(
            self.state,
            SessionState::Submitting | SessionState::Submitted
        )
    }

    /// Merge a batch of offered files.
    ///
    /// `archive_extras` are base names of archive entries that matched no
    /// required name; they are reported in `extra` but never staged.
    pub fn offer(
        &mut self,
        offered: Vec<OfferedFile>,
        archive_extras: Vec<String>,
    ) -> XdetexResult<OfferSummary> {
        self.ensure_unlocked()?;

        let Reconciliation {
            merged,
            found_count,
            added,
            ..
        } = reconciler::reconcile(&self.manifest, &self.accepted, offered);

        for name in &added {
            self.note_extra(name);
        }
        for name in archive_extras {
            self.note_extra(&name);
            if !self.archive_extras.contains(&name) {
                self.archive_extras.push(name);
            }
        }
        self.accepted = merged;
        self.recompute();

        Ok(OfferSummary {
            added,
            found_count,
            total: self.manifest.len(),
        })
    }

    /// Remove a staged file by name. Returns whether anything was removed.
    pub fn remove(&mut self, name: &str) -> XdetexResult<bool> {
        self.ensure_unlocked()?;

        let before = self.accepted.len();
        self.accepted.retain(|f| f.name() != name);
        let removed = self.accepted.len() != before;
        if removed {
            if !self.archive_extras.iter().any(|e| e == name) {
                self.extra_order.retain(|e| e != name);
            }
            self.recompute();
        }
        Ok(removed)
    }

    /// Enter `Submitting` and hand out the files to upload.
    pub fn begin_submit(&mut self) -> XdetexResult<Vec<AcceptedFile>> {
        self.ensure_unlocked()?;

        if !self.missing.is_empty() {
            return Err(XdetexError::IncompleteSubmission {
                found: self.found_count(),
                total: self.manifest.len(),
                missing: self.missing.clone(),
            });
        }

        self.resume_state = Some(self.state);
        self.state = SessionState::Submitting;
        Ok(self.accepted.clone())
    }

    /// Record the upload outcome.
    ///
    /// Success locks the session and clears the staged files; failure
    /// restores the state from before `begin_submit` with files intact.
    pub fn finish_submit(&mut self, succeeded: bool) {
        if self.state != SessionState::Submitting {
            return;
        }

        if succeeded {
            self.accepted.clear();
            self.archive_extras.clear();
            self.extra_order.clear();
            self.recompute();
            self.state = SessionState::Submitted;
            self.resume_state = None;
        } else {
            self.state = self.resume_state.take().unwrap_or(SessionState::Ready);
        }
    }

    fn ensure_unlocked(&self) -> XdetexResult<()> {
        if self.is_locked() {
            Err(XdetexError::SessionLocked)
        } else {
            Ok(())
        }
    }

    fn note_extra(&mut self, name: &str) {
        if !self.manifest.contains(name) && !self.extra_order.iter().any(|e| e == name) {
            self.extra_order.push(name.to_string());
        }
    }

    fn recompute(&mut self) {
        let (missing, _) = reconciler::derive_status(&self.manifest, &self.accepted);
        self.missing = missing;
        self.extra = self
            .extra_order
            .iter()
            .filter(|name| {
                self.archive_extras.contains(name)
                    || self.accepted.iter().any(|f| f.name() == name.as_str())
            })
            .cloned()
            .collect();

        if self.is_locked() {
            return;
        }
        self.state = if self.missing.is_empty() {
            SessionState::Ready
        } else if self.accepted.is_empty() {
            SessionState::Empty
        } else {
            SessionState::PartiallyStaged
        };
    }
}
