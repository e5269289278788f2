//! Timestamp rendering for the line prefix.

use crate::field::ArrayEncoder;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// `YYYY-MM-DD HH:MM:SS.ffffff`, always 26 characters for four-digit years.
pub const PATTERN: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Renders `ts` in its own offset; no conversion to local time or UTC.
#[must_use]
pub fn format<Tz>(ts: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    ts.format(PATTERN).to_string()
}

/// Time encoder used by the default encoder config.
pub fn encode<Tz>(ts: &DateTime<Tz>, enc: &mut dyn ArrayEncoder)
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    enc.append_str(&format(ts));
}
