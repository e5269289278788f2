//! Destinations for rendered lines. A [`Sink`] only moves bytes; rendering is
//! the encoder's job and filtering is the core's.

mod console;
mod file;
mod retention;

pub use console::ConsoleSink;
pub use file::{FileOptions, RollingFile};

/// `Send + Sync` so one sink can be shared by every thread logging through its core.
///
/// Each `write` receives one complete line; implementations must not interleave
/// two concurrent writes.
pub trait Sink: Send + Sync {
    /// # Errors
    /// I/O errors from the underlying stream or file.
    fn write(&self, bytes: &[u8]) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying stream or file.
    fn flush(&self) -> Result<(), crate::Error>;
}
