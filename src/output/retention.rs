//! Backup naming, compression, and pruning for [`RollingFile`](super::RollingFile).

use super::FileOptions;
use crate::internal;
use chrono::{DateTime, Local, NaiveDateTime};
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

const BACKUP_TIME_FORMAT: &str = "%Y-%m-%dT%H-%M-%S%.3f";
/// Length of a rendered `BACKUP_TIME_FORMAT` stamp, e.g. `2024-01-02T03-04-05.000`.
const STAMP_LEN: usize = 23;
const SECS_PER_DAY: u64 = 86_400;

/// `<dir>/<app>-<timestamp>.log`, with a numeric suffix if that name is taken.
pub(super) fn backup_path(dir: &Path, app_name: &str, now: DateTime<Local>) -> PathBuf {
    let stamp = now.format(BACKUP_TIME_FORMAT);
    let mut path = dir.join(format!("{app_name}-{stamp}.log"));
    let mut n = 1;
    while path.exists() || gz_path(&path).exists() {
        path = dir.join(format!("{app_name}-{stamp}-{n}.log"));
        n += 1;
    }
    path
}

fn gz_path(path: &Path) -> PathBuf {
    PathBuf::from(format!("{}.gz", path.display()))
}

/// Replaces `path` with `path.gz`. The original is removed only after the
/// archive is fully written.
pub(super) fn compress_file(path: &Path) -> Result<PathBuf, crate::Error> {
    let mut reader = BufReader::new(File::open(path)?);

    let gz = gz_path(path);
    let writer = BufWriter::new(File::create(&gz)?);
    let mut encoder = GzEncoder::new(writer, Compression::default());
    io::copy(&mut reader, &mut encoder)?;
    encoder.finish()?;

    fs::remove_file(path)?;
    internal::debug("FILE", &format!("Compressed {}", gz.display()));
    Ok(gz)
}

/// Rotation order of a backup: its timestamp, then the `-N` suffix added when
/// two rotations share a millisecond (0 when absent).
type BackupKey = (NaiveDateTime, u32);

/// Parses `<app>-<stamp>[-N].log[.gz]` as written by [`backup_path`]. Files of
/// other apps sharing the directory, including `<app>-<x>.log` active files,
/// yield `None`.
fn backup_key(name: &str, app_name: &str) -> Option<BackupKey> {
    let rest = name.strip_prefix(app_name)?.strip_prefix('-')?;
    let stem = rest
        .strip_suffix(".log.gz")
        .or_else(|| rest.strip_suffix(".log"))?;

    if let Some(stamp) = parse_stamp(stem) {
        return Some((stamp, 0));
    }
    let (stamp, n) = stem.rsplit_once('-')?;
    if n.is_empty() || !n.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((parse_stamp(stamp)?, n.parse().ok()?))
}

fn parse_stamp(s: &str) -> Option<NaiveDateTime> {
    // `%Y` alone would also accept short or signed years.
    if s.len() != STAMP_LEN {
        return None;
    }
    NaiveDateTime::parse_from_str(s, BACKUP_TIME_FORMAT).ok()
}

/// Backups for `options`, newest first.
pub(super) fn list_backups(
    options: &FileOptions,
) -> Result<Vec<(PathBuf, SystemTime)>, crate::Error> {
    let mut backups = Vec::new();
    for entry in fs::read_dir(options.dir())? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(key) = name.to_str().and_then(|n| backup_key(n, options.app_name())) else {
            continue;
        };
        let modified = entry
            .metadata()
            .and_then(|m| m.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);
        backups.push((key, entry.path(), modified));
    }
    backups.sort_by(|a, b| b.0.cmp(&a.0));
    Ok(backups
        .into_iter()
        .map(|(_, path, modified)| (path, modified))
        .collect())
}

/// Deletes backups beyond `max_backups` (0 keeps all) or older than `max_age_days`.
/// Returns how many were removed.
pub(super) fn prune(options: &FileOptions, now: SystemTime) -> Result<usize, crate::Error> {
    let max_age = options
        .age_limit()
        .map(|days| Duration::from_secs(u64::from(days) * SECS_PER_DAY));

    let mut removed = 0;
    for (i, (path, modified)) in list_backups(options)?.into_iter().enumerate() {
        let over_count = options.backup_limit() > 0 && i >= options.backup_limit();
        let too_old = max_age.is_some_and(|max| {
            now.duration_since(modified)
                .is_ok_and(|age| age > max)
        });
        if over_count || too_old {
            internal::debug("FILE", &format!("Removing backup {}", path.display()));
            fs::remove_file(&path)?;
            removed += 1;
        }
    }
    Ok(removed)
}
