use criterion::{Criterion, criterion_group, criterion_main};
use linelog::{EncoderConfig, FileOptions, Level, Logger, Sink};
use std::hint::black_box;
use tempfile::TempDir;

const LINE: &[u8] =
    b"2025-01-15 14:30:00.000000 (bench.1) [net/peer.rs:42] <info>: benchmark log message\n";

fn bench_rolling_file_write(c: &mut Criterion) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let file = FileOptions::new(tmp.path(), "bench")
        .open()
        .expect("failed to open log file");

    c.bench_function("RollingFile::write", |b| {
        b.iter(|| {
            file.write(black_box(LINE)).expect("write failed");
        });
    });

    file.flush().expect("flush failed");
}

fn bench_rolling_file_rotation(c: &mut Criterion) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let file = FileOptions::new(tmp.path(), "bench")
        .max_size(64 * 1024)
        .max_backups(2)
        .open()
        .expect("failed to open log file");

    c.bench_function("RollingFile::write with rotation", |b| {
        b.iter(|| {
            file.write(black_box(LINE)).expect("write failed");
        });
    });
}

fn bench_logger_file(c: &mut Criterion) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let logger = Logger::builder()
        .app_name("bench")
        .instance_id("bench.1")
        .file(tmp.path())
        .encoder_config(EncoderConfig::plain())
        .done()
        .build()
        .expect("failed to build logger");

    c.bench_function("Logger::info to file", |b| {
        b.iter(|| {
            logger.info(black_box("benchmark log message"));
        });
    });

    c.bench_function("Logger::debug filtered", |b| {
        b.iter(|| {
            logger.log(Level::Debug, black_box("dropped"));
        });
    });
}

criterion_group!(
    benches,
    bench_rolling_file_write,
    bench_rolling_file_rotation,
    bench_logger_file
);
criterion_main!(benches);
