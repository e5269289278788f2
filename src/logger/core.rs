//! One encoder, one sink, one minimum level.

use crate::encoder::{EncodeError, Encoder};
use crate::entry::Entry;
use crate::level::Level;
use crate::output::Sink;
use crate::pool;
use std::fmt;
use std::sync::Arc;

/// A filter-encode-write pipeline. A [`Logger`](super::Logger) fans each entry
/// out to all of its cores.
pub struct Core {
    encoder: Box<dyn Encoder>,
    sink: Arc<dyn Sink>,
    min_level: Level,
}

impl fmt::Debug for Core {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Core")
            .field("min_level", &self.min_level)
            .finish_non_exhaustive()
    }
}

impl Clone for Core {
    fn clone(&self) -> Self {
        Self {
            encoder: self.encoder.box_clone(),
            sink: Arc::clone(&self.sink),
            min_level: self.min_level,
        }
    }
}

impl Core {
    #[must_use]
    pub fn new(
        encoder: impl Encoder + 'static,
        sink: impl Sink + 'static,
        min_level: Level,
    ) -> Self {
        Self::with_shared_sink(Box::new(encoder), Arc::new(sink), min_level)
    }

    /// Lets several cores write to the same sink.
    #[must_use]
    pub fn with_shared_sink(
        encoder: Box<dyn Encoder>,
        sink: Arc<dyn Sink>,
        min_level: Level,
    ) -> Self {
        Self {
            encoder,
            sink,
            min_level,
        }
    }

    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    #[must_use]
    pub const fn min_level(&self) -> Level {
        self.min_level
    }

    /// Encodes `entry` and hands the line to the sink. Does not check the level;
    /// callers consult [`Core::enabled`] first.
    ///
    /// A field that fails to marshal still gets its partial line written, ended
    /// with the encoder's line ending, before the failure is reported.
    ///
    /// # Errors
    /// [`crate::Error::Encoding`] for a marshaling failure, or the sink's error.
    pub fn write(&self, entry: &Entry) -> Result<(), crate::Error> {
        let (mut line, failure) = match self.encoder.encode_entry(entry) {
            Ok(line) => (line, None),
            Err(EncodeError { line, source }) => (line, Some(source)),
        };
        if failure.is_some() {
            line.push_str(self.encoder.line_ending());
        }

        let written = self.sink.write(line.as_bytes());
        pool::global().release(line);
        written?;

        failure.map_or(Ok(()), |source| Err(crate::Error::Encoding(source)))
    }

    /// # Errors
    /// The sink's flush error.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.sink.flush()
    }
}
