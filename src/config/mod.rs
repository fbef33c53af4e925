//! Configuration module for xdetex
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (XDETEX_*)
//! 3. `--config` file, or `./xdetex.toml`
//! 4. User config (`<config_dir>/xdetex/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod env;
mod loader;
mod types;

pub use env::EnvWarning;
pub use loader::{user_config_path, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE};
pub use types::{
    AdminConfig, ApiConfig, ColorMode, Config, GuideConfig, ManifestConfig, OutputConfig,
    Verbosity,
};
