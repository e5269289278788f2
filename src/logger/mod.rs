//! Direct construction would require wiring encoders, sinks, and levels by
//! hand; the builder hides that behind a stepwise API, and the resulting
//! Logger fans each entry out to every core whose level admits it.

mod builder;
mod core;
mod init;

pub use self::core::Core;
pub use builder::{ConsoleBuilder, FileBuilder, LoggerBuilder};
pub use init::{build_logger, init_logger};

use crate::entry::Entry;
use crate::field::Field;
use crate::fmt::Caller;
use crate::internal;
use crate::level::Level;
use std::panic::Location;

/// Immutable after build, so it can be shared across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Logger {
    cores: Vec<Core>,
    /// The internal diagnostic logger must not report its own failures.
    report_errors: bool,
}

impl Default for Logger {
    fn default() -> Self {
        Self::nop()
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Logger with no cores; every call is a no-op.
    #[must_use]
    pub const fn nop() -> Self {
        Self {
            cores: Vec::new(),
            report_errors: true,
        }
    }

    #[must_use]
    pub const fn from_cores(cores: Vec<Core>) -> Self {
        Self {
            cores,
            report_errors: true,
        }
    }

    pub(crate) const fn silent(cores: Vec<Core>) -> Self {
        Self {
            cores,
            report_errors: false,
        }
    }

    /// True when at least one core would accept `level`.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        self.cores.iter().any(|core| core.enabled(level))
    }

    /// Logs `msg` at `level`, recording the call site as the caller.
    #[track_caller]
    pub fn log(&self, level: Level, msg: &str) {
        self.log_with(level, msg, Vec::new());
    }

    /// Logs `msg` with structured fields. Failures are reported through the
    /// internal diagnostic logger rather than returned.
    #[track_caller]
    pub fn log_with(&self, level: Level, msg: &str, fields: Vec<Field>) {
        if let Err(e) = self.try_log(level, msg, fields)
            && self.report_errors
        {
            internal::warn("LOGGER", &format!("Failed to write entry: {e}"));
        }
    }

    /// Like [`Logger::log_with`], but returns the first failure.
    ///
    /// # Errors
    /// The first encoding or sink error across all cores; later cores still run.
    #[track_caller]
    pub fn try_log(&self, level: Level, msg: &str, fields: Vec<Field>) -> Result<(), crate::Error> {
        if !self.enabled(level) {
            return Ok(());
        }

        let entry = Entry::new(level, msg)
            .caller(Caller::from_location(Location::caller()))
            .fields(fields);
        self.write_entry(&entry)
    }

    /// Dispatches a prebuilt entry to every core that accepts its level.
    ///
    /// # Errors
    /// The first encoding or sink error across all cores; later cores still run.
    pub fn write_entry(&self, entry: &Entry) -> Result<(), crate::Error> {
        let mut first_err = None;
        for core in self.cores.iter().filter(|core| core.enabled(entry.level)) {
            if let Err(e) = core.write(entry) {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    #[track_caller]
    pub fn debug(&self, msg: &str) {
        self.log(Level::Debug, msg);
    }

    #[track_caller]
    pub fn info(&self, msg: &str) {
        self.log(Level::Info, msg);
    }

    #[track_caller]
    pub fn warn(&self, msg: &str) {
        self.log(Level::Warn, msg);
    }

    #[track_caller]
    pub fn error(&self, msg: &str) {
        self.log(Level::Error, msg);
    }

    /// File sinks may hold buffered bytes until flushed.
    ///
    /// # Errors
    /// Returns the first I/O error encountered across all cores.
    pub fn flush(&self) -> Result<(), crate::Error> {
        for core in &self.cores {
            core.flush()?;
        }
        Ok(())
    }

    /// Lowest minimum level across cores, `None` for a no-op logger.
    #[must_use]
    pub fn min_level(&self) -> Option<Level> {
        self.cores.iter().map(Core::min_level).min()
    }

    #[must_use]
    pub fn core_count(&self) -> usize {
        self.cores.len()
    }
}
