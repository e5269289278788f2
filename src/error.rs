//! Unified error type for all linelog operations.

use crate::field::MarshalError;
use crate::level::ParseLevelError;

/// Error type for linelog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from a sink or the config loader.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Level name outside `debug`, `info`, `warn`, `error`.
    InvalidLevel(String),
    /// A composite field failed to marshal; the partial line was kept.
    Encoding(MarshalError),
    /// The logger could not be assembled from the given options.
    Startup(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::InvalidLevel(level) => write!(f, "invalid log level: '{level}'"),
            Self::Encoding(e) => write!(f, "encoding error: {e}"),
            Self::Startup(s) => write!(f, "cannot construct logger: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::Encoding(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<ParseLevelError> for Error {
    fn from(e: ParseLevelError) -> Self {
        Self::InvalidLevel(e.into_name())
    }
}

impl From<MarshalError> for Error {
    fn from(e: MarshalError) -> Self {
        Self::Encoding(e)
    }
}
