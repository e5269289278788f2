//! The per-emission record handed to encoders.

use crate::field::{Field, Value};
use crate::fmt::Caller;
use crate::level::Level;
use chrono::{DateTime, FixedOffset, Local};

/// One log event. Immutable once handed to a core.
#[derive(Debug, Clone)]
pub struct Entry {
    pub time: DateTime<FixedOffset>,
    pub level: Level,
    pub message: String,
    pub caller: Option<Caller>,
    /// Kept in emission order; duplicate names are not merged.
    pub fields: Vec<Field>,
}

impl Entry {
    /// Entry stamped with the current local time.
    #[must_use]
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            time: Local::now().fixed_offset(),
            level,
            message: message.into(),
            caller: None,
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub const fn at(mut self, time: DateTime<FixedOffset>) -> Self {
        self.time = time;
        self
    }

    #[must_use]
    pub fn caller(mut self, caller: Caller) -> Self {
        self.caller = Some(caller);
        self
    }

    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push(Field::new(name, value));
        self
    }

    #[must_use]
    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }
}
