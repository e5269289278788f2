//! Renderers for the individual pieces of a line prefix. Each one writes
//! through [`ArrayEncoder`](crate::field::ArrayEncoder) rather than into the
//! final buffer.

pub mod caller;
mod color;
pub mod level;
pub mod time;

pub use caller::Caller;
pub use color::{AnsiColor, ColorTable, colorize};
