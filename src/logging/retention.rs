//! Pruning of old log files

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use anyhow::Result;

use super::LOG_FILE_PREFIX;

/// How long a log file is kept after its last write
const RETENTION: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Whether a file name is one of our `logscope-<timestamp>.log` files
fn is_own_log(name: &str) -> bool {
    name.starts_with(LOG_FILE_PREFIX) && name.ends_with(".log")
}

/// Our log files in `logs_dir` last written before `cutoff`
fn expired_logs(logs_dir: &Path, cutoff: SystemTime) -> Result<Vec<PathBuf>> {
    let mut expired = Vec::new();
    for entry in fs::read_dir(logs_dir)? {
        let entry = entry?;
        if !entry.file_name().to_str().is_some_and(is_own_log) {
            continue;
        }
        // Unreadable metadata: leave the file alone
        let modified = entry.metadata().and_then(|m| m.modified());
        if matches!(modified, Ok(time) if time < cutoff) {
            expired.push(entry.path());
        }
    }
    Ok(expired)
}

/// Delete our log files older than a week
///
/// Returns the number of files deleted. A missing directory is not an error.
pub fn cleanup_old_logs(logs_dir: &Path) -> Result<usize> {
    if !logs_dir.is_dir() {
        return Ok(0);
    }

    let cutoff = SystemTime::now()
        .checked_sub(RETENTION)
        .unwrap_or(SystemTime::UNIX_EPOCH);

    let deleted = expired_logs(logs_dir, cutoff)?
        .into_iter()
        .filter(|path| fs::remove_file(path).is_ok())
        .count();
    Ok(deleted)
}
