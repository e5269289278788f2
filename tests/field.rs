//! Tests for field values and the part-list encoders.

use chrono::{FixedOffset, NaiveDate};
use linelog::field::{
    ArrayEncoder, MarshalArray, MarshalObject, ObjectEncoder, ObjectParts, Part, Parts,
};
use linelog::{MarshalError, Value};
use serde::Serialize;
use std::time::Duration;

fn render(value: &Value) -> String {
    let mut parts = Parts::new();
    value.append_to(&mut parts).unwrap();
    parts.render()
}

#[test]
fn primitives_render_as_text() {
    assert_eq!(render(&Value::from(true)), "true");
    assert_eq!(render(&Value::from(-7_i32)), "-7");
    assert_eq!(render(&Value::from(u64::MAX)), "18446744073709551615");
    assert_eq!(render(&Value::from(2.5_f64)), "2.5");
    assert_eq!(render(&Value::from("peer")), "peer");
    assert_eq!(render(&Value::from(b"raw".as_slice())), "raw");
    assert_eq!(render(&Value::from(Duration::from_millis(1500))), "1.5s");
}

#[test]
#[allow(clippy::float_cmp)]
fn primitives_round_trip_through_text() {
    for v in [i64::MIN, -1, 0, i64::MAX] {
        assert_eq!(render(&Value::from(v)).parse::<i64>().unwrap(), v);
    }
    for v in [0, u64::MAX] {
        assert_eq!(render(&Value::from(v)).parse::<u64>().unwrap(), v);
    }
    for v in [0.1, 1e300, -2.5e-8, f64::MIN_POSITIVE, f64::MAX] {
        assert_eq!(render(&Value::from(v)).parse::<f64>().unwrap(), v);
    }
    let negative_zero = render(&Value::from(-0.0_f64)).parse::<f64>().unwrap();
    assert!(negative_zero == 0.0 && negative_zero.is_sign_negative());

    for v in [true, false] {
        assert_eq!(render(&Value::from(v)).parse::<bool>().unwrap(), v);
    }
    let text = "peer 10.0.0.7 said \"hi\"";
    assert_eq!(render(&Value::from(text)), text);
}

#[test]
fn integers_widen_without_loss() {
    assert!(matches!(Value::from(200_u8), Value::Uint(200)));
    assert!(matches!(Value::from(-3_i16), Value::Int(-3)));
    assert!(matches!(Value::from(7_usize), Value::Uint(7)));
    assert!(matches!(Value::from(-7_isize), Value::Int(-7)));
}

#[test]
fn time_value_uses_line_timestamp_format() {
    let ts = NaiveDate::from_ymd_opt(2024, 2, 29)
        .and_then(|d| d.and_hms_micro_opt(8, 5, 3, 42))
        .and_then(|dt| dt.and_local_timezone(FixedOffset::east_opt(0).unwrap()).single())
        .unwrap();
    assert_eq!(render(&Value::from(ts)), "2024-02-29 08:05:03.000042");
}

#[test]
fn primitives_append_one_part_each() {
    let mut parts = Parts::new();
    parts.append_int(1);
    parts.append_str("two");
    parts.append_bool(false);
    assert_eq!(
        parts.as_slice(),
        &[Part::Int(1), Part::Text("two".into()), Part::Bool(false)]
    );
    assert_eq!(parts.len(), 3);
}

#[test]
fn arrays_and_objects_render_nested() {
    let value = Value::object([
        ("ids", Value::array([1, 2, 3])),
        ("name", Value::from("n1")),
    ]);
    assert_eq!(render(&value), "{ids=[1 2 3] name=n1}");
}

#[test]
fn empty_composites_render_brackets() {
    assert_eq!(render(&Value::array(Vec::<i64>::new())), "[]");
    assert_eq!(render(&Value::object(Vec::<(String, i64)>::new())), "{}");
}

#[derive(Serialize)]
struct Peer {
    addr: &'static str,
    port: u16,
}

#[test]
fn reflected_values_render_as_compact_json() {
    let value = Value::reflect(&Peer {
        addr: "10.0.0.7",
        port: 8888,
    })
    .unwrap();
    assert_eq!(render(&value), r#"{"addr":"10.0.0.7","port":8888}"#);
}

#[derive(Debug)]
struct Window(u32, u32);

impl MarshalObject for Window {
    fn marshal_object(&self, enc: &mut dyn ObjectEncoder) -> Result<(), MarshalError> {
        enc.add("from", &Value::from(self.0))?;
        enc.add("to", &Value::from(self.1))
    }
}

#[test]
fn custom_object_marshaler() {
    let mut obj = ObjectParts::new();
    Window(3, 9).marshal_object(&mut obj).unwrap();
    assert_eq!(obj.members().len(), 2);
    assert_eq!(render(&Value::Object(std::sync::Arc::new(Window(3, 9)))), "{from=3 to=9}");
}

#[derive(Debug)]
struct Broken;

impl MarshalArray for Broken {
    fn marshal_array(&self, enc: &mut dyn ArrayEncoder) -> Result<(), MarshalError> {
        enc.append_str("ok");
        Err(MarshalError::new("boom"))
    }
}

#[test]
fn failing_marshaler_propagates_error() {
    let value = Value::array([Value::from(1), Value::Array(std::sync::Arc::new(Broken))]);
    let mut parts = Parts::new();
    let err = value.append_to(&mut parts).unwrap_err();
    assert_eq!(err, MarshalError::new("boom"));
    assert_eq!(parts.render(), "[1 [ok]]");
}
