//! Command-line front end: emit a single line through the standard
//! console + file logger, configured from `linelog.toml` and flags.

use crate::config::{Config, Settings};
use crate::field::{Field, Value};
use crate::logger::init_logger;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for crate::level::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warn => Self::Warn,
            LogLevel::Error => Self::Error,
        }
    }
}

/// linelog - Write one structured log line.
#[derive(Debug, Parser)]
#[command(name = "linelog", version, about = "Write one structured log line")]
pub struct Cli {
    /// Config file (defaults to <config_dir>/linelog/linelog.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Application name, overriding the config file
    #[arg(long)]
    pub app: Option<String>,
    /// Instance id embedded in the line
    #[arg(long)]
    pub id: Option<String>,
    /// Minimum level (debug, info, warn, error)
    #[arg(long)]
    pub level: Option<String>,
    /// Directory for the rolling log file
    #[arg(long, value_name = "DIR")]
    pub dir: Option<String>,
    /// Disable colored level names
    #[arg(long)]
    pub no_color: bool,
    /// Structured field, repeatable
    #[arg(short, long = "field", value_name = "KEY=VALUE", value_parser = parse_field)]
    pub fields: Vec<Field>,
    /// Level of this line
    #[arg(value_enum)]
    pub line_level: LogLevel,
    /// Log message
    #[arg(required = true)]
    pub message: Vec<String>,
}

impl Cli {
    /// Layers command-line overrides on top of file settings.
    #[must_use]
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(app) = &self.app {
            settings.app_name.clone_from(app);
        }
        if let Some(id) = &self.id {
            settings.instance_id.clone_from(id);
        }
        if let Some(level) = &self.level {
            settings.level.clone_from(level);
        }
        if let Some(dir) = &self.dir {
            settings.dir = Some(dir.clone());
        }
        if self.no_color {
            settings.color = false;
        }
        settings
    }

    fn load_settings(&self) -> Result<Settings, crate::Error> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        Ok(self.apply(config.logger))
    }

    /// Loads settings, installs the logger and writes the line.
    #[must_use]
    pub fn run(self) -> ExitCode {
        let settings = match self.load_settings() {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Error loading config: {e}");
                return ExitCode::FAILURE;
            }
        };

        let logger = match init_logger(&settings) {
            Ok(logger) => logger,
            Err(e) => {
                eprintln!("Error initializing logger: {e}");
                return ExitCode::FAILURE;
            }
        };

        let message = self.message.join(" ");
        let result = logger
            .try_log(self.line_level.into(), &message, self.fields)
            .and_then(|()| logger.flush());
        match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error writing log line: {e}");
                ExitCode::FAILURE
            }
        }
    }
}

/// Parses `key=value`. Values that read as integers, floats or booleans keep
/// that type; everything else is text.
///
/// # Errors
/// A message for clap when there is no `=` or the key is empty.
pub fn parse_field(s: &str) -> Result<Field, String> {
    let (key, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty field name in '{s}'"));
    }
    Ok(Field::new(key, parse_value(raw)))
}

fn parse_value(raw: &str) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        Value::Int(n)
    } else if let Ok(n) = raw.parse::<u64>() {
        Value::Uint(n)
    } else if let Ok(f) = raw.parse::<f64>()
        && f.is_finite()
    {
        Value::Float(f)
    } else if let Ok(b) = raw.parse::<bool>() {
        Value::Bool(b)
    } else {
        Value::Text(raw.to_string())
    }
}
