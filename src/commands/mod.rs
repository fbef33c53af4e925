//! Command handlers for the xdetex binary

pub mod admin;
pub mod check;
pub mod guide;
pub mod interactive;
pub mod status;
pub mod submit;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use xdetex::config::{Config, LoadedConfig};
use xdetex::domain::value_objects::RequiredManifest;
use xdetex::presentation::factory;

use crate::ui::context::UiContext;

/// Resolved configuration and output settings shared by every command
pub struct RunContext {
    pub config: Config,
    pub config_source: Option<PathBuf>,
    pub ui: UiContext,
}

impl RunContext {
    pub fn new(loaded: LoadedConfig, ui: UiContext) -> Self {
        Self {
            config: loaded.config,
            config_source: loaded.source,
            ui,
        }
    }

    pub fn manifest(&self) -> Result<Arc<RequiredManifest>> {
        Ok(factory::create_manifest(
            &self.config,
            self.config_source.as_deref(),
        )?)
    }
}
