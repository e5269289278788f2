//! Severity levels, their canonical names, and the label printed in rendered lines.

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so a core can compare an entry's level against its configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Diagnostics that are too noisy outside of development.
    Debug = 0,
    /// Normal operational milestones.
    #[default]
    Info = 1,
    /// Non-fatal anomalies that may need attention.
    Warn = 2,
    /// Failures that prevent an operation from completing.
    Error = 3,
    /// Severe errors that would abort a development build.
    DPanic = 4,
    /// The caller is about to unwind.
    Panic = 5,
    /// The caller is about to exit the process.
    Fatal = 6,
}

impl Level {
    /// Canonical lowercase name, as used in config files and CLI args.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::DPanic => "dpanic",
            Self::Panic => "panic",
            Self::Fatal => "fatal",
        }
    }

    /// Label printed inside the `<...>` segment of a line.
    ///
    /// Identical to [`Level::as_str`] except for `Warn`, which prints as `warning`.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Warn => "warning",
            other => other.as_str(),
        }
    }

    /// Looks up any of the seven canonical names. `FromStr` accepts only the
    /// four configurable minimums.
    #[must_use]
    pub fn from_canonical(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|level| level.as_str() == name)
    }

    /// Every level in ascending severity.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Debug,
            Self::Info,
            Self::Warn,
            Self::Error,
            Self::DPanic,
            Self::Panic,
            Self::Fatal,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` when the name is not one of the configurable levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl ParseLevelError {
    /// The rejected input.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    pub(crate) fn into_name(self) -> String {
        self.0
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

/// Only the four configurable minimums parse, and only in lowercase.
impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
