//! xdetex - participant data intake for the XDetex study
//!
//! Participants export their Facebook data, select the exported JSON files
//! and/or the export ZIP, and submit them to the study backend. xdetex
//! reconciles the selection against the required-file manifest, reports
//! what is missing, and uploads once everything is present. An admin console
//! covers participant listing, stored files, bulk download and email rounds.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use error::{XdetexError, XdetexResult};
