//! Plain log file backend
//!
//! Walks well-known log directories for readable text logs and reads a
//! selected file into lines.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use tokio::io::{AsyncBufReadExt, BufReader};
use walkdir::WalkDir;

use super::SourceError;

/// Extensions of rotated/compressed or binary files that are not browsable as text
const SKIPPED_EXTENSIONS: &[&str] = &["gz", "xz", "bz2", "zst", "zip", "journal", "journal~"];

/// Binary login accounting records kept next to text logs (`wtmp.1` included)
const BINARY_RECORD_FILES: &[&str] = &["wtmp", "btmp", "utmp", "lastlog", "faillog"];

/// Well-known log directories for the current platform
pub fn default_search_paths() -> Vec<PathBuf> {
    if cfg!(windows) {
        vec![
            PathBuf::from(r"C:\Windows\Logs"),
            PathBuf::from(r"C:\Windows\System32\LogFiles"),
            PathBuf::from(r"C:\ProgramData\Logs"),
        ]
    } else if cfg!(target_os = "macos") {
        vec![
            PathBuf::from("/var/log"),
            PathBuf::from("/Library/Logs"),
            PathBuf::from("~/Library/Logs"),
        ]
    } else {
        vec![PathBuf::from("/var/log")]
    }
}

/// Expand a leading `~` in a configured path
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    PathBuf::from(shellexpand::tilde(raw.as_ref()).into_owned())
}

/// Whether a file name looks like a browsable text log
pub fn is_candidate_log(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if name.starts_with('.') {
        return false;
    }
    let stem = name.split('.').next().unwrap_or(name);
    if BINARY_RECORD_FILES.contains(&stem) {
        return false;
    }
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => !SKIPPED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => true,
    }
}

/// Find candidate log files under the given roots.
///
/// Missing roots are skipped; unreadable subdirectories are logged and
/// skipped. Fails only when none of the roots exist.
pub fn discover_files(roots: &[PathBuf], max_depth: usize) -> Result<Vec<String>, SourceError> {
    let mut files = Vec::new();
    let mut any_root = false;

    for root in roots {
        let root = expand_path(root);
        if !root.is_dir() {
            tracing::debug!("Skipping missing log directory {}", root.display());
            continue;
        }
        any_root = true;

        let walker = WalkDir::new(&root)
            .max_depth(max_depth)
            .follow_links(false)
            .into_iter();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!("Skipping unreadable entry under {}: {}", root.display(), e);
                    continue;
                }
            };
            if entry.file_type().is_file() && is_candidate_log(entry.path()) {
                files.push(entry.path().to_string_lossy().into_owned());
            }
        }
    }

    if !any_root {
        let searched = roots
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(SourceError::NotFound(format!(
            "no log directories found (searched {})",
            searched
        )));
    }

    Ok(files)
}

/// Read a log file into lines, keeping only the last `max_lines` if set.
///
/// Lines are streamed so memory stays bounded by the kept tail, not the
/// file size. Invalid UTF-8 is replaced rather than rejected.
pub async fn read_file(path: &Path, max_lines: Option<usize>) -> Result<Vec<String>, SourceError> {
    let io_error = |source: std::io::Error| SourceError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = tokio::fs::File::open(path).await.map_err(io_error)?;
    let mut reader = BufReader::new(file);
    let mut tail: VecDeque<String> = VecDeque::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await.map_err(io_error)? == 0 {
            break;
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        if max_lines == Some(0) {
            continue;
        }
        if max_lines.is_some_and(|max| tail.len() == max) {
            tail.pop_front();
        }
        tail.push_back(String::from_utf8_lossy(&buf).into_owned());
    }

    Ok(tail.into())
}
