//! Portal Backend Client

mod client;

pub use client::{parse_base_url, HttpSettings, PortalClient};
