//! Linelog's own diagnostic logger, for rotation failures, config loading and
//! write errors that have nowhere else to go.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if the
//! builder and `init_logger` race to call `init`. It writes plain lines to
//! stderr and never reports its own failures.

use crate::encoder::{EncoderConfig, LineEncoder};
use crate::field::Field;
use crate::level::Level;
use crate::logger::{Core, Logger};
use crate::output::ConsoleSink;
use std::sync::{Arc, OnceLock};

/// Environment variable naming the internal minimum level.
pub const ENV_LEVEL: &str = "LINELOG_INTERNAL";

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// `OnceLock` guarantees only the first call takes effect; later calls are no-ops.
pub fn init(level: Level) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| build_internal_logger(level));
    if !was_init {
        debug("INTERNAL", &format!("Internal logger ready at {level}"));
    }
}

/// Fallback initializer used when nobody chose a level: reads
/// `LINELOG_INTERNAL`, defaulting to warn.
pub fn init_from_env() {
    if INTERNAL_LOGGER.get().is_some() {
        return;
    }
    let level = std::env::var(ENV_LEVEL)
        .ok()
        .and_then(|name| name.trim().parse().ok())
        .unwrap_or(Level::Warn);
    init(level);
}

/// The running minimum level, `None` before initialization.
#[must_use]
pub fn level() -> Option<Level> {
    INTERNAL_LOGGER.get().and_then(Logger::min_level)
}

fn build_internal_logger(level: Level) -> Logger {
    let encoder = LineEncoder::new(Arc::new(EncoderConfig::plain()), "linelog");
    Logger::silent(vec![Core::new(encoder, ConsoleSink::stderr(), level)])
}

/// Pre-init calls silently vanish rather than crashing.
#[track_caller]
fn log(level: Level, scope: &str, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        logger.log_with(level, msg, vec![Field::new("scope", scope)]);
    }
}

/// Startup and teardown chatter.
#[track_caller]
pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

#[track_caller]
pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

/// Non-fatal anomalies: a failed rotation, a backup that could not be pruned.
#[track_caller]
pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

#[track_caller]
pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
