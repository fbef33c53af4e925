//! Configuration type definitions

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::RequiredManifest;
use crate::error::{XdetexError, XdetexResult};
use crate::infrastructure::http::HttpSettings;

use super::loader::{self, ConfigWarning, LoadedConfig};

/// Portal backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_secs: default_connect_timeout_secs(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_timeout_secs() -> u64 {
    120
}

/// Required file names.
///
/// Defaults to the five Facebook export files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestConfig {
    #[serde(default = "default_required")]
    pub required: Vec<String>,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            required: default_required(),
        }
    }
}

fn default_required() -> Vec<String> {
    RequiredManifest::facebook_export()
        .names()
        .map(str::to_string)
        .collect()
}

/// Links shown by `xdetex guide`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GuideConfig {
    #[serde(default)]
    pub video_url: Option<String>,

    #[serde(default)]
    pub pdf_url: Option<String>,
}

/// Admin console configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> u32 {
    10
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Equivalent `-v` count
    pub fn level(&self) -> u8 {
        match self {
            Verbosity::Quiet | Verbosity::Normal => 0,
            Verbosity::Verbose => 1,
            Verbosity::Debug => 2,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub manifest: ManifestConfig,

    #[serde(default)]
    pub guide: GuideConfig,

    #[serde(default)]
    pub admin: AdminConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> XdetexResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> XdetexResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the config file (explicit, project, user) and apply env overrides
    pub fn discover(explicit: Option<&Path>) -> XdetexResult<LoadedConfig> {
        loader::discover(explicit)
    }

    /// Apply environment variable overrides (XDETEX_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Connection settings for the portal client
    pub fn http_settings(&self) -> HttpSettings {
        HttpSettings {
            base_url: self.api.base_url.clone(),
            connect_timeout: Duration::from_secs(self.api.connect_timeout_secs),
            timeout: Duration::from_secs(self.api.timeout_secs),
        }
    }

    /// Build the required-file manifest.
    ///
    /// Names from the built-in Facebook export keep their export location
    /// hints; other names have none.
    pub fn required_manifest(&self, source: &Path) -> XdetexResult<RequiredManifest> {
        RequiredManifest::from_names(&self.manifest.required).ok_or_else(|| {
            XdetexError::InvalidConfig {
                file: source.to_path_buf(),
                message: "[manifest] required must list at least one file name".to_string(),
            }
        })
    }
}
