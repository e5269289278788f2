//! Configuration struct definitions.

use super::size::parse_size;
use crate::fmt::{AnsiColor, ColorTable};
use crate::level::Level;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use ulid::Ulid;

/// What [`build_logger`](crate::logger::build_logger) needs to assemble the
/// standard console + file logger.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Log file name (`<app_name>.log`) and default instance-id prefix.
    pub app_name: String,
    /// Label embedded in every line; empty means `<app_name>.<ulid>`.
    pub instance_id: String,
    /// Minimum level: `debug`, `info`, `warn` or `error`, lowercase.
    pub level: String,
    /// Directory for the rolling log file; unset or empty means console only.
    pub dir: Option<String>,
    /// Colorize level names on the console.
    pub color: bool,
    /// Per-level color overrides on top of the standard table, e.g.
    /// `info = "cyan"`. Keys are canonical level names.
    pub colors: BTreeMap<String, String>,
    /// Minimum level for linelog's own diagnostics on stderr.
    pub internal_level: String,
    pub rotation: RotationConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "linelog".to_string(),
            instance_id: String::new(),
            level: "info".to_string(),
            dir: None,
            color: true,
            colors: BTreeMap::new(),
            internal_level: "warn".to_string(),
            rotation: RotationConfig::default(),
        }
    }
}

impl Settings {
    #[must_use]
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn instance_id(mut self, id: impl Into<String>) -> Self {
        self.instance_id = id.into();
        self
    }

    #[must_use]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    #[must_use]
    pub fn dir(mut self, dir: impl Into<String>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    #[must_use]
    pub const fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Overrides the console color of one level.
    #[must_use]
    pub fn level_color(mut self, level: impl Into<String>, color: impl Into<String>) -> Self {
        self.colors.insert(level.into(), color.into());
        self
    }

    #[must_use]
    pub fn rotation(mut self, rotation: RotationConfig) -> Self {
        self.rotation = rotation;
        self
    }

    /// The configured instance id, or a fresh `<app_name>.<ulid>`.
    #[must_use]
    pub fn resolved_instance_id(&self) -> String {
        if self.instance_id.is_empty() {
            format!("{}.{}", self.app_name, Ulid::new())
        } else {
            self.instance_id.clone()
        }
    }

    /// Log directory with `~` expanded; `None` when unset or empty.
    #[must_use]
    pub fn log_dir(&self) -> Option<PathBuf> {
        let dir = self.dir.as_deref().map(str::trim).filter(|d| !d.is_empty())?;
        Some(PathBuf::from(shellexpand::tilde(dir).as_ref()))
    }

    /// The standard table with `colors` applied; `None` when there are no overrides.
    ///
    /// # Errors
    /// [`crate::Error::Startup`] for an unknown level or color name.
    pub fn color_table(&self) -> Result<Option<ColorTable>, crate::Error> {
        if self.colors.is_empty() {
            return Ok(None);
        }
        let mut table = ColorTable::default();
        for (level_name, color_name) in &self.colors {
            let level = Level::from_canonical(level_name).ok_or_else(|| {
                crate::Error::Startup(format!("unknown level in colors: '{level_name}'"))
            })?;
            let color = AnsiColor::from_name(color_name).ok_or_else(|| {
                crate::Error::Startup(format!("unknown color for {level_name}: '{color_name}'"))
            })?;
            table = table.with(level, color);
        }
        Ok(Some(table))
    }

    /// # Errors
    /// [`crate::Error::InvalidLevel`] for anything but the four lowercase names.
    pub fn parse_level(&self) -> Result<Level, crate::Error> {
        Ok(self.level.parse()?)
    }
}

/// Rolling-file thresholds.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RotationConfig {
    /// Size before rotation, e.g. `"1M"`, `"512K"`, `"4096"`.
    pub max_size: String,
    /// Rotated files to keep; 0 keeps all.
    pub max_backups: usize,
    /// Delete backups older than this many days.
    pub max_age_days: Option<u32>,
    /// Gzip rotated files.
    pub compress: bool,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            max_size: "1M".to_string(),
            max_backups: 10,
            max_age_days: None,
            compress: false,
        }
    }
}

impl RotationConfig {
    /// # Errors
    /// [`crate::Error::Startup`] when `max_size` is not a size or is zero.
    pub fn max_size_bytes(&self) -> Result<u64, crate::Error> {
        match parse_size(&self.max_size) {
            Some(0) | None => Err(crate::Error::Startup(format!(
                "invalid rotation max_size: '{}'",
                self.max_size
            ))),
            Some(bytes) => Ok(bytes),
        }
    }
}
