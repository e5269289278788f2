//! TOML configuration loading.
//!
//! Separated from struct definitions so that the loading logic (file I/O,
//! default location) stays independent of the serde schema.

mod size;
mod structs;

pub use size::parse_size;
pub use structs::{RotationConfig, Settings};

use crate::internal;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A completely empty config file must still produce a working logger;
/// `#[serde(default)]` on every field makes zero-config work.
///
/// ```toml
/// [logger]
/// app_name = "node"
/// level = "debug"
/// dir = "~/.local/state/node/logs"
///
/// [logger.rotation]
/// max_size = "10M"
/// compress = true
/// ```
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub logger: Settings,
}

impl Config {
    /// Loads from the default location; a missing file yields defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be
    /// read, or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        internal::debug("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// # Errors
    /// TOML syntax or type errors.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config_dir>/linelog/linelog.toml`, e.g. `~/.config/linelog/linelog.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("linelog").join("linelog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }
}
