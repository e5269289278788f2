//! Direct Logger construction would require wiring every encoder and sink by
//! hand; the builder hides that behind a stepwise API.

use super::{Core, Logger};
use crate::encoder::{EncoderConfig, LineEncoder};
use crate::internal;
use crate::level::Level;
use crate::output::{ConsoleSink, FileOptions};
use std::path::PathBuf;
use std::sync::Arc;
use ulid::Ulid;

/// Outputs are recorded here and opened in [`LoggerBuilder::build`], so
/// level and instance id may be set in any order.
#[derive(Debug)]
enum Output {
    Console {
        colors: bool,
        stderr: bool,
        config: Option<EncoderConfig>,
    },
    File {
        options: FileOptions,
        config: Option<EncoderConfig>,
    },
    Core(Core),
}

#[derive(Debug)]
pub struct LoggerBuilder {
    min_level: Level,
    app_name: String,
    instance_id: Option<String>,
    outputs: Vec<Output>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Info is a safe default for production; Debug is opt-in.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: Level::Info,
            app_name: "linelog".to_string(),
            instance_id: None,
            outputs: Vec::new(),
        }
    }

    /// Minimum level shared by every console and file output.
    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Default log file name and instance-id prefix.
    #[must_use]
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }

    /// Label embedded in every line. Defaults to `<app_name>.<ulid>`.
    #[must_use]
    pub fn instance_id(mut self, id: impl Into<String>) -> Self {
        self.instance_id = Some(id.into());
        self
    }

    #[must_use]
    pub const fn console(self) -> ConsoleBuilder {
        ConsoleBuilder {
            parent: self,
            colors: true,
            stderr: false,
            config: None,
        }
    }

    /// File output in `dir`, named after the app.
    #[must_use]
    pub fn file(self, dir: impl Into<PathBuf>) -> FileBuilder {
        let options = FileOptions::new(dir, self.app_name.clone());
        FileBuilder {
            parent: self,
            options,
            config: None,
        }
    }

    /// Custom pipelines keep their own level and encoder.
    #[must_use]
    pub fn core(mut self, core: Core) -> Self {
        self.outputs.push(Output::Core(core));
        self
    }

    /// Opens every file output and assembles the logger. On success the
    /// internal diagnostic logger is started from `LINELOG_INTERNAL` unless
    /// something already started it.
    ///
    /// # Errors
    /// [`crate::Error::Startup`] when a file output cannot be opened or its
    /// options are invalid.
    pub fn build(self) -> Result<Logger, crate::Error> {
        let logger = self.assemble()?;
        internal::init_from_env();
        internal::debug(
            "LOGGER",
            &format!("Built logger with {} cores", logger.core_count()),
        );
        Ok(logger)
    }

    /// Like [`LoggerBuilder::build`], without touching the internal logger.
    pub(crate) fn assemble(self) -> Result<Logger, crate::Error> {
        let instance_id = match self.instance_id {
            Some(id) if !id.is_empty() => id,
            _ => format!("{}.{}", self.app_name, Ulid::new()),
        };

        let mut cores = Vec::with_capacity(self.outputs.len());
        for output in self.outputs {
            let core = match output {
                Output::Console {
                    colors,
                    stderr,
                    config,
                } => {
                    let config = config.unwrap_or_else(|| {
                        if colors {
                            EncoderConfig::colored()
                        } else {
                            EncoderConfig::plain()
                        }
                    });
                    let encoder = LineEncoder::new(Arc::new(config), instance_id.clone());
                    let sink = if stderr {
                        ConsoleSink::stderr()
                    } else {
                        ConsoleSink::stdout()
                    };
                    Core::new(encoder, sink, self.min_level)
                }
                Output::File { options, config } => {
                    let config = config.unwrap_or_else(EncoderConfig::plain);
                    let encoder = LineEncoder::new(Arc::new(config), instance_id.clone());
                    Core::new(encoder, options.open()?, self.min_level)
                }
                Output::Core(core) => core,
            };
            cores.push(core);
        }

        Ok(Logger::from_cores(cores))
    }
}

/// Console output settings.
#[derive(Debug)]
pub struct ConsoleBuilder {
    parent: LoggerBuilder,
    colors: bool,
    stderr: bool,
    config: Option<EncoderConfig>,
}

impl ConsoleBuilder {
    /// Piped output and CI environments can't render ANSI escape codes.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    /// Writes to standard error instead of standard output.
    #[must_use]
    pub const fn stderr(mut self, enabled: bool) -> Self {
        self.stderr = enabled;
        self
    }

    /// Replaces the config chosen by [`ConsoleBuilder::colors`].
    #[must_use]
    pub fn encoder_config(mut self, config: EncoderConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Sub-builder consumes self, so there must be a way back to chain more outputs.
    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.outputs.push(Output::Console {
            colors: self.colors,
            stderr: self.stderr,
            config: self.config,
        });
        self.parent
    }
}

/// Rolling file output settings. Always uncolored unless an explicit
/// encoder config says otherwise.
#[derive(Debug)]
pub struct FileBuilder {
    parent: LoggerBuilder,
    options: FileOptions,
    config: Option<EncoderConfig>,
}

impl FileBuilder {
    #[must_use]
    pub fn max_size(mut self, bytes: u64) -> Self {
        self.options = self.options.max_size(bytes);
        self
    }

    #[must_use]
    pub fn max_backups(mut self, count: usize) -> Self {
        self.options = self.options.max_backups(count);
        self
    }

    #[must_use]
    pub fn max_age_days(mut self, days: Option<u32>) -> Self {
        self.options = self.options.max_age_days(days);
        self
    }

    #[must_use]
    pub fn compress(mut self, enabled: bool) -> Self {
        self.options = self.options.compress(enabled);
        self
    }

    #[must_use]
    pub fn encoder_config(mut self, config: EncoderConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Sub-builder consumes self, so there must be a way back to chain more outputs.
    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.outputs.push(Output::File {
            options: self.options,
            config: self.config,
        });
        self.parent
    }
}
