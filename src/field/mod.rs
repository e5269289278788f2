//! Structured field values and the append interfaces they are rendered through.
//!
//! Every value kind is one variant of [`Value`]. Rendering goes through
//! [`ArrayEncoder`], the same interface the time, level, and caller encoders
//! write to, so one set of renderers serves any line layout built on it.
//! Caller-defined composites implement [`MarshalArray`] or [`MarshalObject`];
//! anything else serializable travels as [`Value::Reflected`].

mod parts;

pub use parts::{ObjectParts, Part, Parts};

use chrono::{DateTime, FixedOffset, TimeZone};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Failure raised by a composite value's own marshaling logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarshalError(String);

impl MarshalError {
    #[must_use]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl fmt::Display for MarshalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for MarshalError {}

impl From<serde_json::Error> for MarshalError {
    fn from(e: serde_json::Error) -> Self {
        Self(e.to_string())
    }
}

/// Sequence of rendered parts that primitives are appended to.
pub trait ArrayEncoder {
    fn append_bool(&mut self, v: bool);
    fn append_int(&mut self, v: i64);
    fn append_uint(&mut self, v: u64);
    fn append_float(&mut self, v: f64);
    fn append_str(&mut self, v: &str);
    /// Bytes are re-interpreted as UTF-8 text.
    fn append_bytes(&mut self, v: &[u8]);
    fn append_duration(&mut self, v: Duration);
    fn append_time(&mut self, v: &DateTime<FixedOffset>);
    fn append_reflected(&mut self, v: &serde_json::Value);

    /// Encodes `v` into a fresh nested encoder and appends the result as one element.
    ///
    /// # Errors
    /// Propagates the marshaler's failure; whatever it appended before failing is kept.
    fn append_array(&mut self, v: &dyn MarshalArray) -> Result<(), MarshalError>;

    /// Keyed counterpart of [`ArrayEncoder::append_array`].
    ///
    /// # Errors
    /// Propagates the marshaler's failure; whatever it added before failing is kept.
    fn append_object(&mut self, v: &dyn MarshalObject) -> Result<(), MarshalError>;
}

/// Keyed sink for object members.
pub trait ObjectEncoder {
    /// # Errors
    /// Fails when `value` is a composite whose marshaling fails.
    fn add(&mut self, key: &str, value: &Value) -> Result<(), MarshalError>;
}

/// Caller-defined array values.
pub trait MarshalArray: fmt::Debug + Send + Sync {
    /// # Errors
    /// Any failure the implementation wants surfaced to the log call.
    fn marshal_array(&self, enc: &mut dyn ArrayEncoder) -> Result<(), MarshalError>;
}

/// Caller-defined object values.
pub trait MarshalObject: fmt::Debug + Send + Sync {
    /// # Errors
    /// Any failure the implementation wants surfaced to the log call.
    fn marshal_object(&self, enc: &mut dyn ObjectEncoder) -> Result<(), MarshalError>;
}

impl MarshalArray for Vec<Value> {
    fn marshal_array(&self, enc: &mut dyn ArrayEncoder) -> Result<(), MarshalError> {
        for value in self {
            value.append_to(enc)?;
        }
        Ok(())
    }
}

impl MarshalObject for Vec<(String, Value)> {
    fn marshal_object(&self, enc: &mut dyn ObjectEncoder) -> Result<(), MarshalError> {
        for (key, value) in self {
            enc.add(key, value)?;
        }
        Ok(())
    }
}

/// One structured value.
#[derive(Debug, Clone)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Duration(Duration),
    Time(DateTime<FixedOffset>),
    Array(Arc<dyn MarshalArray>),
    Object(Arc<dyn MarshalObject>),
    /// Fallback for caller types that only know how to serialize themselves.
    Reflected(serde_json::Value),
}

impl Value {
    /// Array of plain values.
    pub fn array<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Self>,
    {
        let items: Vec<Self> = items.into_iter().map(Into::into).collect();
        Self::Array(Arc::new(items))
    }

    /// Object of plain values, members kept in the given order.
    pub fn object<I, K, V>(members: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Self>,
    {
        let members: Vec<(String, Self)> = members
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::Object(Arc::new(members))
    }

    /// Captures any serializable value through its `serde` representation.
    ///
    /// # Errors
    /// Fails when the value's `Serialize` impl fails.
    pub fn reflect<T: Serialize + ?Sized>(value: &T) -> Result<Self, MarshalError> {
        Ok(Self::Reflected(serde_json::to_value(value)?))
    }

    /// Appends this value's textual form to `enc`.
    ///
    /// # Errors
    /// Only composite values can fail, when their marshaling does.
    pub fn append_to(&self, enc: &mut dyn ArrayEncoder) -> Result<(), MarshalError> {
        match self {
            Self::Bool(v) => enc.append_bool(*v),
            Self::Int(v) => enc.append_int(*v),
            Self::Uint(v) => enc.append_uint(*v),
            Self::Float(v) => enc.append_float(*v),
            Self::Text(v) => enc.append_str(v),
            Self::Bytes(v) => enc.append_bytes(v),
            Self::Duration(v) => enc.append_duration(*v),
            Self::Time(v) => enc.append_time(v),
            Self::Reflected(v) => enc.append_reflected(v),
            Self::Array(v) => return enc.append_array(v.as_ref()),
            Self::Object(v) => return enc.append_object(v.as_ref()),
        }
        Ok(())
    }
}

macro_rules! value_from {
    ($variant:ident as $target:ty: $($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Self::$variant(<$target>::from(v))
                }
            }
        )+
    };
}

value_from!(Int as i64: i8, i16, i32, i64);
value_from!(Uint as u64: u8, u16, u32, u64);
value_from!(Float as f64: f32, f64);

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        i64::try_from(v).map_or(Self::Int(i64::MAX), Self::Int)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        u64::try_from(v).map_or(Self::Uint(u64::MAX), Self::Uint)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Self::Bytes(v.to_vec())
    }
}

impl From<Duration> for Value {
    fn from(v: Duration) -> Self {
        Self::Duration(v)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(v: DateTime<Tz>) -> Self {
        Self::Time(v.fixed_offset())
    }
}

/// Named value attached to an entry. Names need not be unique.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub value: Value,
}

impl Field {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
