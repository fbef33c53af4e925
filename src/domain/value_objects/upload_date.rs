//! Upload timestamps reported by the backend
//!
//! The backend sends ISO-8601 strings, with or without an offset. Dates are
//! shown to participants in Sri Lanka time (UTC+05:30).

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

const DISPLAY_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// A parsed upload timestamp, or the raw string when it could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadDate {
    Parsed(DateTime<Utc>),
    Raw(String),
}

impl UploadDate {
    /// Parse a backend timestamp. Offset-less values are taken as UTC.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Self::Parsed(dt.with_timezone(&Utc));
        }

        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Self::Parsed(Utc.from_utc_datetime(&naive));
            }
        }

        if let Some(midnight) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
        {
            return Self::Parsed(Utc.from_utc_datetime(&midnight));
        }

        Self::Raw(trimmed.to_string())
    }

    /// Long date in display time, e.g. `May 1, 2025`
    pub fn display_date(&self) -> String {
        match self {
            Self::Parsed(dt) => match FixedOffset::east_opt(DISPLAY_OFFSET_SECS) {
                Some(offset) => dt.with_timezone(&offset).format("%B %-d, %Y").to_string(),
                None => dt.format("%B %-d, %Y").to_string(),
            },
            Self::Raw(raw) => raw.clone(),
        }
    }
}

impl fmt::Display for UploadDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_date())
    }
}
