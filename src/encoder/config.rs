//! Which prefix pieces an encoder renders and how.

use crate::field::ArrayEncoder;
use crate::fmt::{self, Caller, ColorTable};
use crate::level::Level;
use chrono::{DateTime, FixedOffset};
use std::sync::Arc;

pub type TimeEncoder = Arc<dyn Fn(&DateTime<FixedOffset>, &mut dyn ArrayEncoder) + Send + Sync>;
pub type LevelEncoder = Arc<dyn Fn(Level, &mut dyn ArrayEncoder) + Send + Sync>;
pub type CallerEncoder = Arc<dyn Fn(&Caller, &mut dyn ArrayEncoder) + Send + Sync>;

/// Shared read-only by every encode call once wrapped in an `Arc`.
///
/// A piece is rendered only when its `include_*` flag is set *and* an encoder
/// for it is present. An empty `line_ending` means `"\n"`.
#[derive(Clone)]
pub struct EncoderConfig {
    pub include_time: bool,
    pub time_encoder: Option<TimeEncoder>,
    pub include_level: bool,
    pub level_encoder: Option<LevelEncoder>,
    pub include_caller: bool,
    pub caller_encoder: Option<CallerEncoder>,
    pub include_message: bool,
    pub line_ending: String,
    /// Inserted between prefix parts only, never before the message.
    pub field_separator: String,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self::plain()
    }
}

impl std::fmt::Debug for EncoderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncoderConfig")
            .field("include_time", &self.include_time)
            .field("time_encoder", &self.time_encoder.is_some())
            .field("include_level", &self.include_level)
            .field("level_encoder", &self.level_encoder.is_some())
            .field("include_caller", &self.include_caller)
            .field("caller_encoder", &self.caller_encoder.is_some())
            .field("include_message", &self.include_message)
            .field("line_ending", &self.line_ending)
            .field("field_separator", &self.field_separator)
            .finish()
    }
}

impl EncoderConfig {
    /// Every piece on, uncolored level names, short caller paths.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            include_time: true,
            time_encoder: Some(Arc::new(fmt::time::encode::<FixedOffset>)),
            include_level: true,
            level_encoder: Some(Arc::new(fmt::level::encode_name)),
            include_caller: true,
            caller_encoder: Some(Arc::new(fmt::caller::encode_short)),
            include_message: true,
            line_ending: "\n".to_string(),
            field_separator: String::new(),
        }
    }

    /// Like [`EncoderConfig::plain`], with level names colored from the standard table.
    #[must_use]
    pub fn colored() -> Self {
        Self::plain().level_encoder(Arc::new(|level: Level, enc: &mut dyn ArrayEncoder| {
            ColorTable::standard().encode(level, enc);
        }))
    }

    /// Colors level names from `table`.
    #[must_use]
    pub fn color_table(self, table: Arc<ColorTable>) -> Self {
        self.level_encoder(Arc::new(move |level: Level, enc: &mut dyn ArrayEncoder| {
            table.encode(level, enc);
        }))
    }

    #[must_use]
    pub const fn time(mut self, enabled: bool) -> Self {
        self.include_time = enabled;
        self
    }

    #[must_use]
    pub const fn level(mut self, enabled: bool) -> Self {
        self.include_level = enabled;
        self
    }

    #[must_use]
    pub const fn caller(mut self, enabled: bool) -> Self {
        self.include_caller = enabled;
        self
    }

    #[must_use]
    pub const fn message(mut self, enabled: bool) -> Self {
        self.include_message = enabled;
        self
    }

    #[must_use]
    pub fn time_encoder(mut self, encoder: TimeEncoder) -> Self {
        self.time_encoder = Some(encoder);
        self
    }

    #[must_use]
    pub fn level_encoder(mut self, encoder: LevelEncoder) -> Self {
        self.level_encoder = Some(encoder);
        self
    }

    #[must_use]
    pub fn caller_encoder(mut self, encoder: CallerEncoder) -> Self {
        self.caller_encoder = Some(encoder);
        self
    }

    #[must_use]
    pub fn line_ending(mut self, ending: impl Into<String>) -> Self {
        self.line_ending = ending.into();
        self
    }

    #[must_use]
    pub fn field_separator(mut self, separator: impl Into<String>) -> Self {
        self.field_separator = separator.into();
        self
    }
}
