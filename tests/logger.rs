//! Tests for logger functionality.

use linelog::field::{ArrayEncoder, MarshalArray};
use linelog::{
    Core, EncoderConfig, Entry, Error, Field, Level, LineEncoder, Logger, MarshalError, Sink,
    Value,
};
use std::sync::{Arc, Mutex, PoisonError};

/// Collects every written line in memory.
#[derive(Debug, Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn text(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_string).collect()
    }
}

impl Sink for Capture {
    fn write(&self, bytes: &[u8]) -> Result<(), Error> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(bytes);
        Ok(())
    }

    fn flush(&self) -> Result<(), Error> {
        Ok(())
    }
}

fn capture_logger(level: Level) -> (Logger, Capture) {
    let sink = Capture::default();
    let encoder = LineEncoder::new(Arc::new(EncoderConfig::plain().time(false)), "t");
    let logger = Logger::builder()
        .core(Core::new(encoder, sink.clone(), level))
        .build()
        .unwrap();
    (logger, sink)
}

#[test]
fn builder_default() {
    let logger = Logger::builder().build().unwrap();
    assert_eq!(logger.core_count(), 0);
    assert_eq!(logger.min_level(), None);
    assert!(!logger.enabled(Level::Fatal));
}

#[test]
fn builder_with_console() {
    let logger = Logger::builder()
        .level(Level::Debug)
        .console()
        .colors(false)
        .done()
        .build()
        .unwrap();
    assert_eq!(logger.core_count(), 1);
    assert_eq!(logger.min_level(), Some(Level::Debug));
}

#[test]
fn builder_multiple_outputs() {
    let dir = tempfile::TempDir::new().unwrap();
    let logger = Logger::builder()
        .app_name("multi")
        .console()
        .stderr(true)
        .done()
        .file(dir.path())
        .done()
        .build()
        .unwrap();
    assert_eq!(logger.core_count(), 2);
    assert!(dir.path().join("multi.log").exists());
}

#[test]
fn log_respects_level() {
    let (logger, sink) = capture_logger(Level::Warn);
    logger.debug("d");
    logger.info("i");
    logger.warn("w");
    logger.error("e");

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("<warning>: w"), "{}", lines[0]);
    assert!(lines[1].ends_with("<error>: e"), "{}", lines[1]);
}

#[test]
fn caller_points_at_call_site() {
    let (logger, sink) = capture_logger(Level::Info);
    logger.info("here");
    let line = sink.text();
    assert!(line.starts_with("(t) [tests/logger.rs:"), "{line}");
}

#[test]
fn fields_follow_message() {
    let (logger, sink) = capture_logger(Level::Info);
    logger.log_with(
        Level::Info,
        "joined",
        vec![Field::new("peer", "p1"), Field::new("height", 42_u64)],
    );
    assert!(sink.text().ends_with("<info>: joined peer=p1 height=42\n"));
}

#[test]
fn cores_filter_independently() {
    let verbose = Capture::default();
    let quiet = Capture::default();
    let config = Arc::new(EncoderConfig::plain().time(false));
    let logger = Logger::from_cores(vec![
        Core::new(LineEncoder::new(Arc::clone(&config), "v"), verbose.clone(), Level::Debug),
        Core::new(LineEncoder::new(config, "q"), quiet.clone(), Level::Error),
    ]);

    logger.info("only verbose");
    logger.error("both");

    assert_eq!(verbose.lines().len(), 2);
    assert_eq!(quiet.lines().len(), 1);
    assert_eq!(logger.min_level(), Some(Level::Debug));
}

#[test]
fn shared_sink_receives_both_cores() {
    let sink = Capture::default();
    let shared: Arc<dyn Sink> = Arc::new(sink.clone());
    let config = Arc::new(EncoderConfig::plain().time(false));
    let first = Box::new(LineEncoder::new(Arc::clone(&config), "a"));
    let second = Box::new(LineEncoder::new(config, "b"));
    let logger = Logger::from_cores(vec![
        Core::with_shared_sink(first, Arc::clone(&shared), Level::Info),
        Core::with_shared_sink(second, shared, Level::Info),
    ]);
    logger.info("x");
    assert_eq!(sink.lines(), ["(a) [] <info>: x", "(b) [] <info>: x"]);
}

#[derive(Debug)]
struct Fails;

impl MarshalArray for Fails {
    fn marshal_array(&self, enc: &mut dyn ArrayEncoder) -> Result<(), MarshalError> {
        enc.append_str("part");
        Err(MarshalError::new("refused"))
    }
}

#[test]
fn partial_line_is_written_and_error_returned() {
    let (logger, sink) = capture_logger(Level::Info);
    let entry = Entry::new(Level::Info, "m").field("bad", Value::Array(Arc::new(Fails)));

    let err = logger.write_entry(&entry).unwrap_err();
    assert!(matches!(err, Error::Encoding(ref e) if *e == MarshalError::new("refused")));
    assert_eq!(sink.text(), "(t) [] <info>: m bad=[part]\n");
}

#[test]
fn partial_line_uses_configured_line_ending() {
    let sink = Capture::default();
    let config = EncoderConfig::plain().time(false).line_ending("\r\n");
    let core = Core::new(LineEncoder::new(Arc::new(config), "t"), sink.clone(), Level::Info);
    let logger = Logger::from_cores(vec![core]);

    let entry = Entry::new(Level::Info, "m").field("bad", Value::Array(Arc::new(Fails)));
    assert!(logger.write_entry(&entry).is_err());
    logger.info("next");
    assert_eq!(sink.text(), "(t) [] <info>: m bad=[part]\r\n(t) [] <info>: next\r\n");
}

#[test]
fn try_log_skips_disabled_levels() {
    let (logger, sink) = capture_logger(Level::Error);
    let fields = vec![Field::new("bad", Value::Array(Arc::new(Fails)))];
    assert!(logger.try_log(Level::Info, "m", fields).is_ok());
    assert!(sink.text().is_empty());
}

#[test]
fn nop_logger_does_nothing() {
    let logger = Logger::nop();
    logger.error("dropped");
    assert!(logger.flush().is_ok());
    assert_eq!(logger.core_count(), 0);
}

#[test]
fn cloned_logger_shares_sinks() {
    let (logger, sink) = capture_logger(Level::Info);
    let copy = logger.clone();
    logger.info("one");
    copy.info("two");
    assert_eq!(sink.lines().len(), 2);
}

#[test]
fn concurrent_logging_keeps_lines_whole() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 100;

    let (logger, sink) = capture_logger(Level::Info);
    std::thread::scope(|s| {
        for t in 0..THREADS {
            let logger = &logger;
            s.spawn(move || {
                for i in 0..PER_THREAD {
                    let fields = vec![Field::new("t", t), Field::new("i", i)];
                    logger.log_with(Level::Info, "tick", fields);
                }
            });
        }
    });

    let lines = sink.lines();
    assert_eq!(lines.len(), THREADS * PER_THREAD);
    assert!(lines.iter().all(|l| l.starts_with("(t) [") && l.contains("<info>: tick t=")));
}
