//! In-memory encoders backed by a list of rendered parts.

use super::{ArrayEncoder, MarshalArray, MarshalError, MarshalObject, ObjectEncoder, Value};
use crate::fmt::time;
use crate::pool::{Buffer, Recycle};
use chrono::{DateTime, FixedOffset};
use std::fmt::{self, Write as _};
use std::time::Duration;

/// One element appended to a [`Parts`] list.
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
    Duration(Duration),
    Time(DateTime<FixedOffset>),
    Array(Vec<Self>),
    Object(Vec<(String, Self)>),
    Reflected(serde_json::Value),
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Uint(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Duration(v) => write!(f, "{v:?}"),
            Self::Time(v) => f.write_str(&time::format(v)),
            Self::Array(elems) => {
                f.write_char('[')?;
                for (i, elem) in elems.iter().enumerate() {
                    if i > 0 {
                        f.write_char(' ')?;
                    }
                    write!(f, "{elem}")?;
                }
                f.write_char(']')
            }
            Self::Object(members) => {
                f.write_char('{')?;
                for (i, (key, value)) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_char(' ')?;
                    }
                    write!(f, "{key}={value}")?;
                }
                f.write_char('}')
            }
            Self::Reflected(v) => write!(f, "{v}"),
        }
    }
}

/// Ordered list of parts; the scratch the line encoder assembles a prefix in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parts {
    elems: Vec<Part>,
}

impl Parts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Part] {
        &self.elems
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.elems.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Writes every part into `out`, with `separator` between consecutive parts.
    pub fn write_joined(&self, out: &mut Buffer, separator: &str) {
        for (i, part) in self.elems.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            // Buffer's fmt::Write never fails.
            let _ = write!(out, "{part}");
        }
    }

    /// Renders the parts as one string, space-separated.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, part) in self.elems.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{part}");
        }
        out
    }

    fn push(&mut self, part: Part) {
        self.elems.push(part);
    }
}

impl Recycle for Parts {
    fn reset(&mut self) {
        self.elems.clear();
    }

    fn capacity(&self) -> usize {
        self.elems.capacity() * std::mem::size_of::<Part>()
    }
}

impl ArrayEncoder for Parts {
    fn append_bool(&mut self, v: bool) {
        self.push(Part::Bool(v));
    }

    fn append_int(&mut self, v: i64) {
        self.push(Part::Int(v));
    }

    fn append_uint(&mut self, v: u64) {
        self.push(Part::Uint(v));
    }

    fn append_float(&mut self, v: f64) {
        self.push(Part::Float(v));
    }

    fn append_str(&mut self, v: &str) {
        self.push(Part::Text(v.to_string()));
    }

    fn append_bytes(&mut self, v: &[u8]) {
        self.push(Part::Text(String::from_utf8_lossy(v).into_owned()));
    }

    fn append_duration(&mut self, v: Duration) {
        self.push(Part::Duration(v));
    }

    fn append_time(&mut self, v: &DateTime<FixedOffset>) {
        self.push(Part::Time(*v));
    }

    fn append_reflected(&mut self, v: &serde_json::Value) {
        self.push(Part::Reflected(v.clone()));
    }

    fn append_array(&mut self, v: &dyn MarshalArray) -> Result<(), MarshalError> {
        let mut nested = Self::new();
        let result = v.marshal_array(&mut nested);
        self.push(Part::Array(nested.elems));
        result
    }

    fn append_object(&mut self, v: &dyn MarshalObject) -> Result<(), MarshalError> {
        let mut nested = ObjectParts::new();
        let result = v.marshal_object(&mut nested);
        self.push(Part::Object(nested.members));
        result
    }
}

/// Keyed counterpart of [`Parts`], members kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectParts {
    members: Vec<(String, Part)>,
}

impl ObjectParts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn members(&self) -> &[(String, Part)] {
        &self.members
    }
}

impl ObjectEncoder for ObjectParts {
    fn add(&mut self, key: &str, value: &Value) -> Result<(), MarshalError> {
        let mut nested = Parts::new();
        let result = value.append_to(&mut nested);
        if let Some(part) = nested.elems.pop() {
            self.members.push((key.to_string(), part));
        }
        result
    }
}
