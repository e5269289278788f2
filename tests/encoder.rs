//! Tests for the line encoder.

use chrono::{DateTime, FixedOffset, NaiveDate};
use linelog::field::{ArrayEncoder, MarshalArray};
use linelog::fmt::caller;
use linelog::{
    AnsiColor, Caller, ColorTable, EncoderConfig, Entry, Level, LineEncoder, MarshalError, Value,
};
use regex::Regex;
use std::sync::Arc;

fn encoder(config: EncoderConfig, id: &str) -> LineEncoder {
    LineEncoder::new(Arc::new(config), id)
}

fn encode(enc: &LineEncoder, entry: &Entry) -> String {
    enc.encode_entry(entry).unwrap().to_string_lossy()
}

fn fixed_time() -> DateTime<FixedOffset> {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .and_then(|d| d.and_hms_micro_opt(12, 0, 0, 123_456))
        .and_then(|dt| dt.and_local_timezone(FixedOffset::east_opt(0).unwrap()).single())
        .unwrap()
}

#[test]
fn minimal_line() {
    let enc = encoder(EncoderConfig::plain().time(false), "svc.1");
    assert_eq!(
        encode(&enc, &Entry::new(Level::Info, "hello")),
        "(svc.1) [] <info>: hello\n"
    );
}

#[test]
fn full_plain_line() {
    let enc = encoder(EncoderConfig::plain(), "node.7");
    let entry = Entry::new(Level::Error, "peer dropped")
        .at(fixed_time())
        .caller(Caller::new("src/net/peer.rs", 42))
        .field("peer", "10.0.0.7")
        .field("attempts", 3);
    assert_eq!(
        encode(&enc, &entry),
        concat!(
            "2024-03-01 12:00:00.123456 (node.7) [net/peer.rs:42] ",
            "<error>: peer dropped peer=10.0.0.7 attempts=3\n",
        )
    );
}

#[test]
fn current_time_prefix_shape() {
    let enc = encoder(EncoderConfig::plain(), "x");
    let line = encode(&enc, &Entry::new(Level::Debug, "tick"));
    let re =
        Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{6} \(x\) \[\] <debug>: tick\n$")
            .unwrap();
    assert!(re.is_match(&line), "{line:?}");
}

#[test]
fn plain_warn_prints_warning() {
    let enc = encoder(EncoderConfig::plain().time(false), "a");
    assert_eq!(
        encode(&enc, &Entry::new(Level::Warn, "disk low")),
        "(a) [] <warning>: disk low\n"
    );
}

#[test]
fn colored_warn() {
    let enc = encoder(EncoderConfig::colored().time(false), "a");
    assert_eq!(
        encode(&enc, &Entry::new(Level::Warn, "disk low")),
        "(a) [] <\x1b[33mwarning\x1b[0m>: disk low\n"
    );
}

#[test]
fn custom_color_table() {
    let table = Arc::new(ColorTable::new(AnsiColor::WHITE).with(Level::Info, AnsiColor::CYAN));
    let enc = encoder(EncoderConfig::plain().time(false).color_table(table), "a");
    assert_eq!(
        encode(&enc, &Entry::new(Level::Info, "m")),
        "(a) [] <\x1b[36minfo\x1b[0m>: m\n"
    );
}

#[test]
fn disabled_pieces_keep_their_brackets() {
    let config = EncoderConfig::plain().time(false).level(false).caller(false);
    let enc = encoder(config, "id");
    let entry = Entry::new(Level::Error, "m").caller(Caller::new("a/b.rs", 1));
    assert_eq!(encode(&enc, &entry), "(id) [] <>: m\n");
}

#[test]
fn missing_encoders_render_nothing() {
    let mut config = EncoderConfig::plain();
    config.time_encoder = None;
    config.level_encoder = None;
    config.caller_encoder = None;
    let enc = encoder(config, "id");
    let entry = Entry::new(Level::Info, "m").caller(Caller::new("a/b.rs", 1));
    assert_eq!(encode(&enc, &entry), "(id) [] <>: m\n");
}

#[test]
fn message_can_be_omitted() {
    let enc = encoder(EncoderConfig::plain().time(false).message(false), "id");
    assert_eq!(
        encode(&enc, &Entry::new(Level::Info, "hidden").field("k", "v")),
        "(id) [] <info>:  k=v\n"
    );
}

#[test]
fn custom_and_empty_line_endings() {
    let crlf = encoder(EncoderConfig::plain().time(false).line_ending("\r\n"), "id");
    assert_eq!(encode(&crlf, &Entry::new(Level::Info, "m")), "(id) [] <info>: m\r\n");

    let empty = encoder(EncoderConfig::plain().time(false).line_ending(""), "id");
    assert_eq!(encode(&empty, &Entry::new(Level::Info, "m")), "(id) [] <info>: m\n");
}

#[test]
fn full_caller_encoder() {
    let config = EncoderConfig::plain()
        .time(false)
        .caller_encoder(Arc::new(caller::encode_full));
    let enc = encoder(config, "id");
    let entry = Entry::new(Level::Info, "m").caller(Caller::new("src/net/peer.rs", 9));
    assert_eq!(encode(&enc, &entry), "(id) [src/net/peer.rs:9] <info>: m\n");
}

#[test]
fn composite_fields() {
    let enc = encoder(EncoderConfig::plain().time(false), "id");
    let entry = Entry::new(Level::Info, "sync")
        .field("heights", Value::array([10_u64, 11, 12]))
        .field("peer", Value::object([("addr", "h1"), ("role", "seed")]));
    assert_eq!(
        encode(&enc, &entry),
        "(id) [] <info>: sync heights=[10 11 12] peer={addr=h1 role=seed}\n"
    );
}

#[derive(Debug)]
struct Fails;

impl MarshalArray for Fails {
    fn marshal_array(&self, enc: &mut dyn ArrayEncoder) -> Result<(), MarshalError> {
        enc.append_int(1);
        Err(MarshalError::new("nope"))
    }
}

#[test]
fn marshal_failure_returns_partial_line() {
    let enc = encoder(EncoderConfig::plain().time(false), "id");
    let entry = Entry::new(Level::Info, "m")
        .field("ok", 1)
        .field("bad", Value::Array(Arc::new(Fails)))
        .field("never", 2);
    let err = enc.encode_entry(&entry).unwrap_err();
    assert_eq!(err.source, MarshalError::new("nope"));
    assert_eq!(err.line.to_string_lossy(), "(id) [] <info>: m ok=1 bad=[1]");
}

#[test]
fn clone_renders_identically() {
    let enc = encoder(EncoderConfig::plain(), "node.1");
    let copy = enc.clone();
    let entry = Entry::new(Level::Warn, "same")
        .at(fixed_time())
        .caller(Caller::new("a/b/c.rs", 5))
        .field("n", 1);
    assert_eq!(encode(&enc, &entry), encode(&copy, &entry));
    assert_eq!(copy.instance_id(), "node.1");
}

#[test]
fn concurrent_encoding_produces_whole_lines() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 200;

    let enc = encoder(EncoderConfig::plain().time(false), "svc");
    std::thread::scope(|s| {
        for t in 0..THREADS {
            let enc = &enc;
            s.spawn(move || {
                for i in 0..PER_THREAD {
                    let entry = Entry::new(Level::Info, format!("t{t}")).field("i", i);
                    assert_eq!(encode(enc, &entry), format!("(svc) [] <info>: t{t} i={i}\n"));
                }
            });
        }
    });
}
