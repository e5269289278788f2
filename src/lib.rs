//! `linelog` - Single-line structured logging with rolling files.
//!
//! Every entry renders as one line:
//!
//! ```text
//! 2024-03-01 12:00:00.000000 (node.01HQ...) [net/peer.rs:42] <info>: connected peer=10.0.0.7
//! ```
//!
//! Built from:
//! - Pooled byte buffers reused across entries
//! - A closed set of field values with array/object marshaling
//! - ANSI-colored or plain level names, microsecond timestamps
//! - Console and size-rotated file sinks with backup retention
//! - A process-wide logger installed from TOML settings
//!
//! # Example
//!
//! ```
//! use linelog::{Field, Level, Logger};
//!
//! let logger = Logger::builder()
//!     .level(Level::Debug)
//!     .instance_id("svc.1")
//!     .console()
//!         .colors(false)
//!         .done()
//!     .build()
//!     .expect("console logger");
//!
//! logger.info("Application started");
//! logger.log_with(Level::Warn, "slow peer", vec![Field::new("rtt_ms", 350)]);
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the `linelog` command-line binary

pub mod config;
pub mod encoder;
pub mod entry;
pub mod error;
pub mod field;
pub mod fmt;
pub mod global;
pub mod internal;
pub mod level;
pub mod logger;
mod macros;
pub mod output;
pub mod pool;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::{Config, RotationConfig, Settings};
pub use encoder::{EncodeError, Encoder, EncoderConfig, LineEncoder};
pub use entry::Entry;
pub use error::Error;
pub use field::{Field, MarshalError, Value};
pub use fmt::{AnsiColor, Caller, ColorTable};
pub use level::Level;
pub use logger::{Core, Logger, LoggerBuilder, build_logger, init_logger};
pub use output::{ConsoleSink, FileOptions, RollingFile, Sink};
pub use pool::{Buffer, BufferPool};
