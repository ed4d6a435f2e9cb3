//! # Configuration
//!
//! Host settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.navchrome/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Loading runs before the logger exists, so it logs nothing itself; callers
//! report the returned [`ConfigOrigin`] once logging is up.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::bridge::assets::DEFAULT_CONTENT_ROOT;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NavChromeConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AssetsConfig {
    pub base_dir: Option<String>,
    pub content_root: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_FILE: &str = "navchrome.log";
pub const DEFAULT_ASSET_DIR: &str = ".";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub log_level: String,
    pub log_file: PathBuf,
    pub asset_dir: PathBuf,
    pub content_root: String,
}

/// Values given on the command line; `None` means not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub asset_dir: Option<PathBuf>,
    pub content_root: Option<String>,
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

/// Returns the path to `~/.navchrome/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".navchrome").join("config.toml"))
}

/// Where the loaded config came from.
#[derive(Debug)]
pub enum ConfigOrigin {
    File(PathBuf),
    /// No file existed; a commented-out default was written here.
    Generated(PathBuf),
    /// No file existed and writing the default failed.
    NotWritten(PathBuf, std::io::Error),
    NoHome,
}

impl fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigOrigin::File(p) => write!(f, "Loaded config from {}", p.display()),
            ConfigOrigin::Generated(p) => {
                write!(f, "No config file found, generated default at {}", p.display())
            }
            ConfigOrigin::NotWritten(p, e) => {
                write!(f, "No config file found, failed to write default at {}: {e}", p.display())
            }
            ConfigOrigin::NoHome => write!(f, "Could not determine home directory, using default config"),
        }
    }
}

impl ConfigOrigin {
    /// True when the origin is worth a warning rather than an info line.
    pub fn is_degraded(&self) -> bool {
        matches!(self, ConfigOrigin::NotWritten(..) | ConfigOrigin::NoHome)
    }
}

/// Load config from `~/.navchrome/config.toml`.
pub fn load_config() -> Result<(NavChromeConfig, ConfigOrigin), ConfigError> {
    load_config_at(config_path())
}

/// Load config from `path`, or defaults when `path` is `None`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `NavChromeConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_at(path: Option<PathBuf>) -> Result<(NavChromeConfig, ConfigOrigin), ConfigError> {
    let Some(path) = path else {
        return Ok((NavChromeConfig::default(), ConfigOrigin::NoHome));
    };

    if !path.exists() {
        let origin = match generate_default_config(&path) {
            Ok(()) => ConfigOrigin::Generated(path),
            Err(e) => ConfigOrigin::NotWritten(path, e),
        };
        return Ok((NavChromeConfig::default(), origin));
    }

    let config = load_config_from(&path)?;
    Ok((config, ConfigOrigin::File(path)))
}

pub fn load_config_from(path: &Path) -> Result<NavChromeConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&contents).map_err(ConfigError::Parse)
}

fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# NavChrome Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "info"                 # "error", "warn", "info", "debug", "trace"
# log_file = "navchrome.log"         # Or set NAVCHROME_LOG_FILE

# [assets]
# base_dir = "."                     # Package directory; or NAVCHROME_ASSET_DIR
# content_root = "www"               # Icon names resolve under this; or NAVCHROME_CONTENT_ROOT
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &NavChromeConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &NavChromeConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| env("NAVCHROME_LOG_LEVEL"))
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    // Log file: env → config → default
    let log_file = env("NAVCHROME_LOG_FILE")
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    let asset_dir = cli
        .asset_dir
        .clone()
        .or_else(|| env("NAVCHROME_ASSET_DIR").map(PathBuf::from))
        .or_else(|| config.assets.base_dir.clone().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSET_DIR));

    let content_root = cli
        .content_root
        .clone()
        .or_else(|| env("NAVCHROME_CONTENT_ROOT"))
        .or_else(|| config.assets.content_root.clone())
        .unwrap_or_else(|| DEFAULT_CONTENT_ROOT.to_string());

    ResolvedConfig {
        log_level,
        log_file: PathBuf::from(log_file),
        asset_dir,
        content_root,
    }
}
