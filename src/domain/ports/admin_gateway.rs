//! AdminGateway port - the admin console's backend endpoints
//!
//! Participant listing, per-participant file management, bulk download and
//! notification rounds. All persistence and email dispatch live in the
//! backend; this trait only describes the request/response contracts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::XdetexResult;

/// One row of the participants table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub file_status: bool,
    #[serde(default)]
    pub send_mail_01: bool,
    #[serde(default)]
    pub send_mail_02: bool,
    #[serde(default)]
    pub date_uploaded: Option<String>,
}

/// One page of participants plus the total row count
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantPage {
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub total: u64,
}

impl ParticipantPage {
    /// Number of pages for `page_size`, at least one
    pub fn page_count(&self, page_size: u32) -> u64 {
        if page_size == 0 {
            return 1;
        }
        self.total.div_ceil(u64::from(page_size)).max(1)
    }
}

/// Query for `GET /admin/participants`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticipantQuery {
    /// 1-based page number
    pub page: u32,
    pub page_size: u32,
    /// Put participants who uploaded first
    pub sort_by_status: bool,
}

impl Default for ParticipantQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            sort_by_status: false,
        }
    }
}

/// Files stored for one participant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFiles {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub uploaded_files: Vec<String>,
}

/// Which notification batch to send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailRound {
    First,
    Second,
    All,
}

impl EmailRound {
    /// Endpoint path under the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            EmailRound::First => "/email/send-round-1",
            EmailRound::Second => "/email/send-round-2",
            EmailRound::All => "/email/send-all",
        }
    }
}

impl fmt::Display for EmailRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmailRound::First => write!(f, "round 1"),
            EmailRound::Second => write!(f, "round 2"),
            EmailRound::All => write!(f, "all rounds"),
        }
    }
}

impl FromStr for EmailRound {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "round-1" | "first" => Ok(EmailRound::First),
            "2" | "round-2" | "second" => Ok(EmailRound::Second),
            "all" => Ok(EmailRound::All),
            other => Err(format!("unknown email round '{}' (expected 1, 2 or all)", other)),
        }
    }
}

/// Backend calls made by the admin console
pub trait AdminGateway {
    fn participants(&self, query: &ParticipantQuery) -> XdetexResult<ParticipantPage>;

    /// Files stored for `email`; an unknown participant yields an empty list
    fn user_files(&self, email: &str) -> XdetexResult<UserFiles>;

    fn delete_all_files(&self, email: &str) -> XdetexResult<serde_json::Value>;

    fn delete_file(&self, email: &str, filename: &str) -> XdetexResult<serde_json::Value>;

    /// Every collected upload, as one archive
    fn download_all(&self) -> XdetexResult<Vec<u8>>;

    fn send_round(&self, round: EmailRound) -> XdetexResult<serde_json::Value>;
}
