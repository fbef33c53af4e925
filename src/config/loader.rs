//! Configuration loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{XdetexError, XdetexResult};

use super::env;
use super::types::Config;

/// Project-local config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "xdetex.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Result of config discovery
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config came from, `None` for built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> XdetexResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse TOML content; `path` is only used for messages.
pub fn parse_with_warnings(content: &str, path: &Path) -> XdetexResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| XdetexError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration.
///
/// An explicit path must exist. Otherwise `./xdetex.toml` is tried, then the
/// user config, then built-in defaults. Environment overrides apply last.
pub fn discover(explicit: Option<&Path>) -> XdetexResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let project = PathBuf::from(PROJECT_CONFIG_FILE);
            if project.is_file() {
                Some(project)
            } else {
                user_config_path().filter(|p| p.is_file())
            }
        }
    };

    let Some(path) = candidate else {
        return Ok(LoadedConfig {
            config: with_env_overrides(Config::default()),
            source: None,
            warnings: Vec::new(),
        });
    };

    let (config, warnings) = load_with_warnings(&path).map_err(|e| match e {
        XdetexError::Io(io) => XdetexError::InvalidConfig {
            file: path.clone(),
            message: io.to_string(),
        },
        other => other,
    })?;

    Ok(LoadedConfig {
        config: with_env_overrides(config),
        source: Some(path),
        warnings,
    })
}

/// `<config_dir>/xdetex/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("xdetex").join("config.toml"))
}

/// Apply environment variable overrides (XDETEX_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok(), &mut std::io::stderr())
}

pub(crate) fn with_env_overrides_from<W: Write>(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
    warnings: &mut W,
) -> Config {
    if let Some(raw) = get_env(env::API_BASE_URL).filter(|v| !v.trim().is_empty()) {
        apply(env::base_url(&raw), &mut config.api.base_url, warnings);
    }
    if let Some(raw) = get_env(env::VERBOSITY) {
        apply(env::verbosity(&raw), &mut config.output.verbosity, warnings);
    }
    if let Some(raw) = get_env(env::TIMEOUT_SECS) {
        apply(env::timeout_secs(&raw), &mut config.api.timeout_secs, warnings);
    }

    config
}

fn apply<T, W: Write>(parsed: Result<T, env::EnvWarning>, target: &mut T, warnings: &mut W) {
    match parsed {
        Ok(value) => *target = value,
        Err(warning) => {
            let _ = writeln!(warnings, "{}", warning);
        }
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "api",
        "base_url",
        "connect_timeout_secs",
        "timeout_secs",
        "manifest",
        "required",
        "guide",
        "video_url",
        "pdf_url",
        "admin",
        "page_size",
        "output",
        "verbosity",
        "color",
    ];

    env::closest(unknown, CANDIDATES.iter().copied()).map(str::to_string)
}
