//! Source-location rendering for the `[...]` segment.

use crate::field::ArrayEncoder;
use std::fmt;
use std::panic::Location;

/// Where a log call was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub file: String,
    pub line: u32,
    pub function: Option<String>,
}

impl Caller {
    #[must_use]
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
            function: None,
        }
    }

    #[must_use]
    pub fn function(mut self, name: impl Into<String>) -> Self {
        self.function = Some(name.into());
        self
    }

    /// Captured from a `#[track_caller]` chain.
    #[must_use]
    pub fn from_location(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line())
    }

    /// `dir/file.rs:line`: the file and its immediate parent directory.
    #[must_use]
    pub fn short(&self) -> String {
        format!("{}:{}", trim_path(&self.file), self.line)
    }

    /// `path/to/file.rs:line` with the path untouched.
    #[must_use]
    pub fn full(&self) -> String {
        format!("{}:{}", self.file, self.line)
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Keeps the last two components of `path`.
fn trim_path(path: &str) -> &str {
    let is_sep = |c: char| c == '/' || c == '\\';
    let Some(last) = path.rfind(is_sep) else {
        return path;
    };
    path[..last]
        .rfind(is_sep)
        .map_or(path, |prev| &path[prev + 1..])
}

/// Caller encoder used by the default encoder config.
pub fn encode_short(caller: &Caller, enc: &mut dyn ArrayEncoder) {
    enc.append_str(&caller.short());
}

pub fn encode_full(caller: &Caller, enc: &mut dyn ArrayEncoder) {
    enc.append_str(&caller.full());
}
