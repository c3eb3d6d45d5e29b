//! TOML configuration file.
//!
//! Read from the platform-appropriate location unless a path is given:
//! - Linux:    `$XDG_CONFIG_HOME/tablet-area/config.toml` (or `~/.config/...`)
//! - Windows:  `%APPDATA%\TabletArea\config.toml`
//! - macOS:    `~/Library/Application Support/TabletArea/config.toml`
//!
//! ```toml
//! [tool]
//! path = "/usr/bin/xsetwacom"
//!
//! [defaults]
//! aspect = "16:9"
//! device_resolution = 2540
//! unit = "mm"
//! align = "center"
//! # device = "Wacom Intuos S Pen stylus"
//! ```
//!
//! Every field is optional.  Command-line flags override these values, and
//! these values override the built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tablet_area_core::{Alignment, AspectRatio, LengthUnit};
use thiserror::Error;
use tracing::debug;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub tool: ToolConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Where the device utility lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolConfig {
    #[serde(default = "default_tool_path")]
    pub path: PathBuf,
}

/// Defaults for options not given on the command line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DefaultsConfig {
    /// Screen aspect ratio, `"W:H"`.
    #[serde(default)]
    pub aspect: AspectRatio,
    /// Device resolution in lines per inch.
    #[serde(default = "default_device_resolution")]
    pub device_resolution: u32,
    #[serde(default)]
    pub unit: LengthUnit,
    #[serde(default)]
    pub align: Alignment,
    /// Device id or name; absent selects automatically.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_tool_path() -> PathBuf {
    PathBuf::from("/usr/bin/xsetwacom")
}
fn default_device_resolution() -> u32 {
    2540
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            path: default_tool_path(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            aspect: AspectRatio::default(),
            device_resolution: default_device_resolution(),
            unit: LengthUnit::default(),
            align: Alignment::default(),
            device: None,
        }
    }
}

// ── Config loading ────────────────────────────────────────────────────────────

/// Resolves the full path to the default config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    platform_config_dir()
        .map(|dir| dir.join("config.toml"))
        .ok_or(ConfigError::NoPlatformConfigDir)
}

/// Loads `AppConfig` from `explicit`, or from the default location.
///
/// A missing file at the default location, or no default location at all,
/// yields `AppConfig::default()`.  A missing explicit file is an error.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors and
/// [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let path = match config_file_path() {
        Ok(path) => path,
        Err(e) => {
            debug!("{e}; using built-in defaults");
            return Ok(AppConfig::default());
        }
    };

    match read_config(&path) {
        Err(ConfigError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            debug!("no config at {}; using built-in defaults", path.display());
            Ok(AppConfig::default())
        }
        other => other,
    }
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: AppConfig = toml::from_str(&content)?;
    debug!("loaded config from {}", path.display());
    Ok(cfg)
}

/// Resolves the platform config directory, including the `tablet-area` part.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("TabletArea"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("tablet-area"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("TabletArea")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
