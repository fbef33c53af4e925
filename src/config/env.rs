//! XDETEX_* environment overrides
//!
//! Every override variable has one rule. A value that fails its rule becomes
//! an [`EnvWarning`] and the file or default value stays in effect.

use std::fmt;

use crate::infrastructure::http::parse_base_url;

use super::types::Verbosity;

pub const API_BASE_URL: &str = "XDETEX_API_BASE_URL";
pub const VERBOSITY: &str = "XDETEX_VERBOSITY";
pub const TIMEOUT_SECS: &str = "XDETEX_TIMEOUT_SECS";

const VERBOSITY_NAMES: &[(&str, Verbosity)] = &[
    ("quiet", Verbosity::Quiet),
    ("normal", Verbosity::Normal),
    ("verbose", Verbosity::Verbose),
    ("debug", Verbosity::Debug),
];

/// Rejected override value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvWarning {
    pub var: &'static str,
    pub value: String,
    pub expected: String,
    pub suggestion: Option<&'static str>,
}

impl fmt::Display for EnvWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Warning: Invalid {} value '{}'", self.var, self.value)?;
        if let Some(suggestion) = self.suggestion {
            write!(f, ". Did you mean '{}'?", suggestion)?;
        }
        write!(f, "\nExpected {}", self.expected)
    }
}

/// `XDETEX_API_BASE_URL`: an http(s) URL. Returns the trimmed input.
pub fn base_url(raw: &str) -> Result<String, EnvWarning> {
    let trimmed = raw.trim();
    parse_base_url(trimmed)
        .map(|_| trimmed.to_string())
        .map_err(|problem| EnvWarning {
            var: API_BASE_URL,
            value: raw.to_string(),
            expected: format!("an http or https URL ({})", problem),
            suggestion: None,
        })
}

/// `XDETEX_VERBOSITY`: one of the level names, case-insensitive.
pub fn verbosity(raw: &str) -> Result<Verbosity, EnvWarning> {
    let input = raw.trim().to_lowercase();
    if let Some((_, level)) = VERBOSITY_NAMES.iter().find(|(name, _)| *name == input) {
        return Ok(*level);
    }

    let names: Vec<&'static str> = VERBOSITY_NAMES.iter().map(|(name, _)| *name).collect();
    Err(EnvWarning {
        var: VERBOSITY,
        value: raw.to_string(),
        expected: format!("one of: {}", names.join(", ")),
        suggestion: closest(&input, names.iter().copied()),
    })
}

/// `XDETEX_TIMEOUT_SECS`: a whole number of seconds above zero.
pub fn timeout_secs(raw: &str) -> Result<u64, EnvWarning> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(EnvWarning {
            var: TIMEOUT_SECS,
            value: raw.to_string(),
            expected: "a positive number of seconds".to_string(),
            suggestion: None,
        }),
    }
}

/// Nearest candidate within two edits. Ties go to the earlier candidate.
pub fn closest<'a>(input: &str, candidates: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    candidates
        .into_iter()
        .map(|candidate| (candidate, edit_distance(input, candidate)))
        .filter(|(_, dist)| *dist <= 2)
        .min_by_key(|(_, dist)| *dist)
        .map(|(candidate, _)| candidate)
}

/// Levenshtein distance over chars, single row.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == *cb {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }

    row[b.len()]
}
