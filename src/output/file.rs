//! Size-rotated log file with optional age limit and gzip archives.

use super::{Sink, retention};
use crate::internal;
use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use std::time::SystemTime;

/// Rotation threshold when none is configured.
pub const DEFAULT_MAX_SIZE: u64 = 1024 * 1024;
/// Rotated files kept when none is configured.
pub const DEFAULT_MAX_BACKUPS: usize = 10;

/// Where the active file lives and when it rotates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOptions {
    dir: PathBuf,
    app_name: String,
    max_size: u64,
    max_backups: usize,
    max_age_days: Option<u32>,
    compress: bool,
}

impl FileOptions {
    /// Writes to `<dir>/<app_name>.log`, 1 MiB per file, 10 backups, no age limit.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, app_name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            app_name: app_name.into(),
            max_size: DEFAULT_MAX_SIZE,
            max_backups: DEFAULT_MAX_BACKUPS,
            max_age_days: None,
            compress: false,
        }
    }

    /// Bytes the active file may hold before the next write rotates it.
    #[must_use]
    pub const fn max_size(mut self, bytes: u64) -> Self {
        self.max_size = bytes;
        self
    }

    /// Rotated files to keep; 0 keeps every backup.
    #[must_use]
    pub const fn max_backups(mut self, count: usize) -> Self {
        self.max_backups = count;
        self
    }

    #[must_use]
    pub const fn max_age_days(mut self, days: Option<u32>) -> Self {
        self.max_age_days = days;
        self
    }

    /// Gzip each backup right after rotation.
    #[must_use]
    pub const fn compress(mut self, enabled: bool) -> Self {
        self.compress = enabled;
        self
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    #[must_use]
    pub const fn size_limit(&self) -> u64 {
        self.max_size
    }

    #[must_use]
    pub const fn backup_limit(&self) -> usize {
        self.max_backups
    }

    #[must_use]
    pub const fn age_limit(&self) -> Option<u32> {
        self.max_age_days
    }

    #[must_use]
    pub const fn compresses(&self) -> bool {
        self.compress
    }

    /// Path of the active file.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.log", self.app_name))
    }

    /// Creates the directory and opens the active file for appending.
    ///
    /// # Errors
    /// [`crate::Error::Startup`] for a zero size limit, an empty app name, or a
    /// directory/file that cannot be created.
    pub fn open(self) -> Result<RollingFile, crate::Error> {
        if self.max_size == 0 {
            return Err(crate::Error::Startup("max_size must be greater than 0".into()));
        }
        if self.app_name.is_empty() {
            return Err(crate::Error::Startup("log file name is empty".into()));
        }

        fs::create_dir_all(&self.dir).map_err(|e| {
            crate::Error::Startup(format!("cannot create {}: {e}", self.dir.display()))
        })?;

        let path = self.path();
        let file = open_append(&path)
            .map_err(|e| crate::Error::Startup(format!("cannot open {}: {e}", path.display())))?;
        let size = file.metadata().map(|m| m.len()).unwrap_or(0);
        internal::debug("FILE", &format!("Opened {} ({size} bytes)", path.display()));

        Ok(RollingFile {
            options: self,
            state: Mutex::new(State {
                file: Some(file),
                size,
            }),
        })
    }
}

fn open_append(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

#[derive(Debug)]
struct State {
    /// `None` only between closing the old file and opening the new one.
    file: Option<File>,
    size: u64,
}

/// File sink that rotates before a write would push it past its size limit.
///
/// A single line longer than the limit is still written whole, into a fresh file.
#[derive(Debug)]
pub struct RollingFile {
    options: FileOptions,
    state: Mutex<State>,
}

impl RollingFile {
    #[must_use]
    pub const fn options(&self) -> &FileOptions {
        &self.options
    }

    /// Moves the active file aside as a backup and starts a new one.
    ///
    /// # Errors
    /// I/O errors renaming the active file or opening its replacement.
    pub fn rotate(&self) -> Result<(), crate::Error> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        self.rotate_locked(&mut state)
    }

    fn rotate_locked(&self, state: &mut State) -> Result<(), crate::Error> {
        if let Some(mut file) = state.file.take() {
            file.flush()?;
        }

        let current = self.options.path();
        let backup =
            retention::backup_path(&self.options.dir, &self.options.app_name, Local::now());
        let renamed = fs::rename(&current, &backup);

        // After a failed rename the old file is reopened and still holds its bytes.
        let file = open_append(&current)?;
        state.size = file.metadata().map_or(0, |m| m.len());
        state.file = Some(file);
        renamed?;
        internal::debug(
            "FILE",
            &format!("Rotated {} -> {}", current.display(), backup.display()),
        );

        if self.options.compress
            && let Err(e) = retention::compress_file(&backup)
        {
            internal::warn(
                "FILE",
                &format!("Failed to compress {}: {e}", backup.display()),
            );
        }

        if let Err(e) = retention::prune(&self.options, SystemTime::now()) {
            internal::warn("FILE", &format!("Failed to prune backups: {e}"));
        }

        Ok(())
    }
}

impl Sink for RollingFile {
    fn write(&self, bytes: &[u8]) -> Result<(), crate::Error> {
        let len = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        if state.size > 0 && state.size.saturating_add(len) > self.options.max_size {
            self.rotate_locked(&mut state)?;
        }

        if state.file.is_none() {
            state.file = Some(open_append(&self.options.path())?);
        }
        if let Some(file) = state.file.as_mut() {
            file.write_all(bytes)?;
        }
        state.size = state.size.saturating_add(len);
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(file) = state.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}
