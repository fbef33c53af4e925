//! User-facing intake status
//!
//! Every outcome gets its own wording; nothing falls back to a generic
//! error line.

use std::fmt;

/// Status after the most recent intake operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeStatus {
    /// Nothing has happened yet
    Idle,
    /// All required files are staged
    ReadyToSubmit { from_archive: bool },
    /// Every offered file was already staged
    NothingNew,
    /// Some required files are still missing
    FilesMissing {
        found: usize,
        total: usize,
        from_archive: bool,
    },
    /// The selected archive could not be read
    ArchiveUnreadable,
    /// Submit refused because required files are missing
    CannotSubmit { found: usize, total: usize },
    /// Upload in progress
    Uploading,
    /// Upload accepted
    UploadSucceeded,
    /// Upload failed; staged files are kept
    UploadFailed,
    /// The participant submitted in an earlier session
    AlreadySubmitted { date: Option<String> },
}

impl IntakeStatus {
    /// Status after merging an offer
    pub fn after_offer(
        found: usize,
        total: usize,
        offered_any: bool,
        added_nothing: bool,
        from_archive: bool,
    ) -> Self {
        if found == total {
            IntakeStatus::ReadyToSubmit { from_archive }
        } else if offered_any && added_nothing {
            IntakeStatus::NothingNew
        } else {
            IntakeStatus::FilesMissing {
                found,
                total,
                from_archive,
            }
        }
    }

    /// Short machine-readable label
    pub fn code(&self) -> &'static str {
        match self {
            IntakeStatus::Idle => "idle",
            IntakeStatus::ReadyToSubmit { .. } => "ready",
            IntakeStatus::NothingNew => "nothing_new",
            IntakeStatus::FilesMissing { .. } => "files_missing",
            IntakeStatus::ArchiveUnreadable => "archive_unreadable",
            IntakeStatus::CannotSubmit { .. } => "cannot_submit",
            IntakeStatus::Uploading => "uploading",
            IntakeStatus::UploadSucceeded => "uploaded",
            IntakeStatus::UploadFailed => "upload_failed",
            IntakeStatus::AlreadySubmitted { .. } => "already_submitted",
        }
    }

    /// Whether the status should be shown as a problem
    pub fn is_problem(&self) -> bool {
        matches!(
            self,
            IntakeStatus::FilesMissing { .. }
                | IntakeStatus::ArchiveUnreadable
                | IntakeStatus::CannotSubmit { .. }
                | IntakeStatus::UploadFailed
        )
    }

    pub fn message(&self) -> String {
        match self {
            IntakeStatus::Idle => String::new(),
            IntakeStatus::ReadyToSubmit { from_archive: false } => {
                "All required files selected. Ready to submit.".to_string()
            }
            IntakeStatus::ReadyToSubmit { from_archive: true } => {
                "All required files found inside ZIP. Ready to submit.".to_string()
            }
            IntakeStatus::NothingNew => {
                "Selected files were already added. No new files added.".to_string()
            }
            IntakeStatus::FilesMissing {
                found,
                total,
                from_archive: false,
            } => format!(
                "{}/{} required files uploaded. Some files are still missing.",
                found, total
            ),
            IntakeStatus::FilesMissing {
                found,
                total,
                from_archive: true,
            } => format!(
                "{}/{} required files found inside ZIP. Some files are missing.",
                found, total
            ),
            IntakeStatus::ArchiveUnreadable => {
                "Unable to read ZIP file. Please upload a valid ZIP file.".to_string()
            }
            IntakeStatus::CannotSubmit { found, total } => format!(
                "Cannot submit: {}/{} files uploaded. Please upload the missing files.",
                found, total
            ),
            IntakeStatus::Uploading => {
                "All required files are ready. Uploading to server...".to_string()
            }
            IntakeStatus::UploadSucceeded => "Upload successful!".to_string(),
            IntakeStatus::UploadFailed => "Upload failed. Please try again.".to_string(),
            IntakeStatus::AlreadySubmitted { date: Some(date) } => {
                format!("You have already uploaded your files (uploaded on {}).", date)
            }
            IntakeStatus::AlreadySubmitted { date: None } => {
                "You have already uploaded your files.".to_string()
            }
        }
    }
}

impl fmt::Display for IntakeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// `3/5 files uploaded`, or the archive wording after a ZIP offer
pub fn progress_line(found: usize, total: usize, from_archive: bool) -> String {
    if from_archive {
        format!("{}/{} files found (including ZIP contents)", found, total)
    } else {
        format!("{}/{} files uploaded", found, total)
    }
}
