//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.workbench/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::workshop::DEFAULT_BATCH_LIMIT;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WorkbenchConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub data_file: Option<String>,
    pub log_file: Option<String>,
    pub batch_limit: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub list_width: Option<u16>,
    pub wide_layout: Option<WideLayout>,
}

/// When to show the third (result) pane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WideLayout {
    /// Only when the terminal is wide enough.
    #[default]
    Auto,
    Always,
    Never,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DATA_FILE: &str = "data/workshop.toml";
pub const DEFAULT_LOG_FILE: &str = "workbench.log";
pub const DEFAULT_LIST_WIDTH: u16 = 28;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub data_file: PathBuf,
    pub log_file: PathBuf,
    pub batch_limit: u32,
    pub list_width: u16,
    pub wide_layout: WideLayout,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub data_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub batch_limit: Option<u32>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.workbench/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".workbench").join("config.toml"))
}

/// Load config from `~/.workbench/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `WorkbenchConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<WorkbenchConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(WorkbenchConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(WorkbenchConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<WorkbenchConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Workbench Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# data_file = "data/workshop.toml"   # Or set WORKBENCH_DATA; .toml or .json
# log_file = "workbench.log"         # Or set WORKBENCH_LOG
# batch_limit = 20                   # Largest batch offered in batch mode

# [display]
# list_width = 28                    # Columns for recipe names
# wide_layout = "auto"               # "auto", "always" or "never"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &WorkbenchConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &WorkbenchConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Data file: CLI → env → config → default
    let data_file = cli
        .data_file
        .clone()
        .or_else(|| env("WORKBENCH_DATA").map(PathBuf::from))
        .or_else(|| config.general.data_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env("WORKBENCH_LOG").map(PathBuf::from))
        .or_else(|| config.general.log_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    let batch_limit = cli
        .batch_limit
        .or(config.general.batch_limit)
        .unwrap_or(DEFAULT_BATCH_LIMIT)
        .max(1);

    ResolvedConfig {
        data_file,
        log_file,
        batch_limit,
        list_width: config
            .display
            .list_width
            .unwrap_or(DEFAULT_LIST_WIDTH)
            .max(1),
        wide_layout: config.display.wide_layout.unwrap_or_default(),
    }
}
