//! Composition of the standard console + rolling-file logger from [`Settings`].

use super::{Logger, LoggerBuilder};
use crate::config::Settings;
use crate::encoder::EncoderConfig;
use crate::global;
use crate::internal;
use crate::level::Level;
use std::sync::Arc;

/// Validates `settings` and lays out the outputs without opening anything.
fn builder_for(settings: &Settings) -> Result<LoggerBuilder, crate::Error> {
    let level = settings.parse_level()?;
    let colors = settings.color_table()?;

    let mut console = Logger::builder()
        .level(level)
        .app_name(&settings.app_name)
        .instance_id(settings.resolved_instance_id())
        .console()
        .colors(settings.color);
    if settings.color
        && let Some(table) = colors
    {
        console = console.encoder_config(EncoderConfig::plain().color_table(Arc::new(table)));
    }
    let mut builder = console.done();

    if let Some(dir) = settings.log_dir() {
        let rotation = &settings.rotation;
        builder = builder
            .file(dir)
            .max_size(rotation.max_size_bytes()?)
            .max_backups(rotation.max_backups)
            .max_age_days(rotation.max_age_days)
            .compress(rotation.compress)
            .done();
    }

    Ok(builder)
}

/// Builds a colorized-or-plain stdout core and, when a directory is set, a
/// plain rolling-file core. Both use the same minimum level.
///
/// # Errors
/// [`crate::Error::InvalidLevel`] for a level name other than `debug`, `info`,
/// `warn`, `error`; [`crate::Error::Startup`] for invalid rotation or color
/// settings or an unopenable log file.
pub fn build_logger(settings: &Settings) -> Result<Logger, crate::Error> {
    builder_for(settings)?.build()
}

/// Builds the logger and installs it as the global logger, replacing any
/// previous one. The internal diagnostic logger starts at
/// `settings.internal_level` unless it is already running.
///
/// Nothing process-wide changes when building fails.
///
/// # Errors
/// Same as [`build_logger`].
pub fn init_logger(settings: &Settings) -> Result<Arc<Logger>, crate::Error> {
    let logger = Arc::new(builder_for(settings)?.assemble()?);

    match settings.internal_level.parse::<Level>() {
        Ok(level) => internal::init(level),
        Err(_) => internal::init_from_env(),
    }
    global::replace(Arc::clone(&logger));
    internal::debug(
        "INIT",
        &format!("Installed global logger for {}", settings.app_name),
    );
    Ok(logger)
}
