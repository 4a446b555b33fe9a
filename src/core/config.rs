//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.quicktips/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::selection::{
    DEFAULT_HIDE_MS, DEFAULT_PROMOTE_MS, DEFAULT_SETTLE_MS, DEFAULT_SWITCH_MS, TransitionTiming,
};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QuickTipsConfig {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub transition: TransitionConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Alternate content table, absolute or relative to `~/.quicktips/`.
    pub file: Option<String>,
}

/// Staged-transition delays in milliseconds.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TransitionConfig {
    pub hide_ms: Option<u64>,
    pub switch_ms: Option<u64>,
    pub settle_ms: Option<u64>,
    pub promote_ms: Option<u64>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Alternate content table, if any; `None` means the built-in set.
    pub content_file: Option<PathBuf>,
    pub timing: TransitionTiming,
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

/// Returns `~/.quicktips/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".quicktips"))
}

/// Returns the path to `~/.quicktips/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.quicktips/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `QuickTipsConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<QuickTipsConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(QuickTipsConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(QuickTipsConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: QuickTipsConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Quick Tips Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [content]
# file = "content.toml"    # Alternate tip table, relative to ~/.quicktips/

# [transition]             # Staged-reveal delays, in milliseconds
# hide_ms = 100            # media teardown grace
# switch_ms = 150          # layout rearrangement after identifiers switch
# settle_ms = 50           # final grace before media mounts
# promote_ms = 100         # pending-selection staging delay
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

/// Resolve the final config by collapsing: defaults → config file → env
/// vars → CLI.
///
/// `cli_content` is the `--content` flag (None = not specified).
pub fn resolve(config: &QuickTipsConfig, cli_content: Option<&str>) -> ResolvedConfig {
    // Content file: CLI → env → config (relative paths anchor to ~/.quicktips/)
    let content_file = cli_content
        .map(|s| s.to_string())
        .or_else(|| std::env::var("QUICKTIPS_CONTENT").ok())
        .or_else(|| config.content.file.clone())
        .map(|raw| {
            let path = PathBuf::from(&raw);
            if path.is_absolute() {
                path
            } else {
                config_dir().map(|d| d.join(&path)).unwrap_or(path)
            }
        });

    let timing = TransitionTiming {
        hide: Duration::from_millis(config.transition.hide_ms.unwrap_or(DEFAULT_HIDE_MS)),
        switch: Duration::from_millis(config.transition.switch_ms.unwrap_or(DEFAULT_SWITCH_MS)),
        settle: Duration::from_millis(config.transition.settle_ms.unwrap_or(DEFAULT_SETTLE_MS)),
        promote: Duration::from_millis(config.transition.promote_ms.unwrap_or(DEFAULT_PROMOTE_MS)),
    };

    ResolvedConfig {
        content_file,
        timing,
    }
}
