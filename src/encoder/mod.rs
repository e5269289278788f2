//! Line encoder: renders an [`Entry`] as
//! `<time> (<instance>) [<caller>] <<level>>: <message> <name>=<value>...`.
//!
//! The prefix pieces are rendered through [`ArrayEncoder`] into a scratch
//! [`Parts`] list and then joined into the output buffer, so the same time,
//! level, and caller renderers can back any other layout built on the
//! [`Encoder`] trait.

mod config;

pub use config::{CallerEncoder, EncoderConfig, LevelEncoder, TimeEncoder};

use crate::entry::Entry;
use crate::field::{ArrayEncoder, Field, MarshalError, Parts};
use crate::pool::{self, Buffer, Pool};
use std::fmt;
use std::sync::Arc;

/// Returned when a field fails to marshal. `line` holds what was rendered
/// before the failure, without a line ending.
#[derive(Debug)]
pub struct EncodeError {
    pub line: Buffer,
    pub source: MarshalError,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field encoding failed: {}", self.source)
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Turns entries into bytes for a sink.
///
/// `Send + Sync` so one encoder can serve every thread that logs through its core.
pub trait Encoder: Send + Sync {
    /// Renders `entry` into a buffer taken from the global pool. The caller owns
    /// the returned buffer and releases it once written.
    ///
    /// # Errors
    /// A field's marshaling failed; the partial line rides along in the error.
    fn encode_entry(&self, entry: &Entry) -> Result<Buffer, EncodeError>;

    /// Independent copy sharing configuration but no scratch state.
    fn box_clone(&self) -> Box<dyn Encoder>;

    /// Terminator of every encoded line, also used to close a partial one.
    fn line_ending(&self) -> &str {
        "\n"
    }
}

/// Human-readable single-line encoder bound to one instance identifier.
pub struct LineEncoder {
    config: Arc<EncoderConfig>,
    instance_id: String,
    scratch: Pool<Parts>,
}

impl fmt::Debug for LineEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineEncoder")
            .field("config", &self.config)
            .field("instance_id", &self.instance_id)
            .finish_non_exhaustive()
    }
}

/// A fresh encoder with the same config and identifier; scratch is not shared.
impl Clone for LineEncoder {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.config), self.instance_id.clone())
    }
}

impl LineEncoder {
    #[must_use]
    pub fn new(config: Arc<EncoderConfig>, instance_id: impl Into<String>) -> Self {
        Self {
            config,
            instance_id: instance_id.into(),
            scratch: Pool::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    #[must_use]
    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// The configured line ending, `"\n"` when left empty.
    #[must_use]
    pub fn line_ending(&self) -> &str {
        if self.config.line_ending.is_empty() {
            "\n"
        } else {
            &self.config.line_ending
        }
    }

    /// See [`Encoder::encode_entry`].
    ///
    /// # Errors
    /// A field's marshaling failed; the partial line rides along in the error.
    pub fn encode_entry(&self, entry: &Entry) -> Result<Buffer, EncodeError> {
        let cfg = &*self.config;
        let mut line = pool::global().acquire();

        self.write_prefix(entry, &mut line);

        if cfg.include_message {
            line.push_str(&entry.message);
        }

        for field in &entry.fields {
            if let Err(source) = self.write_field(field, &mut line) {
                return Err(EncodeError { line, source });
            }
        }

        line.push_str(self.line_ending());

        Ok(line)
    }

    fn write_prefix(&self, entry: &Entry, line: &mut Buffer) {
        let cfg = &*self.config;
        let mut parts = self.scratch.scoped();

        if cfg.include_time
            && let Some(encode_time) = &cfg.time_encoder
        {
            encode_time(&entry.time, &mut *parts);
            parts.append_str(" ");
        }

        parts.append_str("(");
        parts.append_str(&self.instance_id);
        parts.append_str(")");

        parts.append_str(" [");
        if let Some(caller) = &entry.caller
            && cfg.include_caller
            && let Some(encode_caller) = &cfg.caller_encoder
        {
            encode_caller(caller, &mut *parts);
        }

        parts.append_str("] <");
        if cfg.include_level
            && let Some(encode_level) = &cfg.level_encoder
        {
            encode_level(entry.level, &mut *parts);
        }

        parts.append_str(">: ");

        parts.write_joined(line, &cfg.field_separator);
    }

    fn write_field(&self, field: &Field, line: &mut Buffer) -> Result<(), MarshalError> {
        let mut parts = self.scratch.scoped();
        let result = field.value.append_to(&mut *parts);

        line.push_str(" ");
        line.push_str(&field.name);
        line.push_str("=");
        parts.write_joined(line, "");

        result
    }
}

impl Encoder for LineEncoder {
    fn encode_entry(&self, entry: &Entry) -> Result<Buffer, EncodeError> {
        Self::encode_entry(self, entry)
    }

    fn box_clone(&self) -> Box<dyn Encoder> {
        Box::new(self.clone())
    }

    fn line_ending(&self) -> &str {
        Self::line_ending(self)
    }
}
