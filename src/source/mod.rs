//! Log sources
//!
//! A source is one log-producing entity: a service journal unit, a log file,
//! or a container. This module defines the source model and the two
//! capabilities the rest of the application consumes: enumerating candidate
//! identifiers for a category, and fetching the raw lines of one source.

pub mod catalog;
mod command;
pub mod container;
pub mod file;
pub mod journal;
pub mod system;

pub use catalog::SourceCatalog;
pub use system::SystemSources;

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category of log source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceCategory {
    /// systemd-style service journals
    Journal,
    /// Plain log files under well-known directories
    File,
    /// Container runtime logs
    Container,
}

impl SourceCategory {
    /// All categories in display order
    pub const ALL: [SourceCategory; 3] = [
        SourceCategory::Journal,
        SourceCategory::File,
        SourceCategory::Container,
    ];

    /// Get the display label for this category
    pub fn label(&self) -> &'static str {
        match self {
            SourceCategory::Journal => "Journal",
            SourceCategory::File => "Files",
            SourceCategory::Container => "Containers",
        }
    }

    /// Position of this category in [`SourceCategory::ALL`]
    pub fn index(&self) -> usize {
        match self {
            SourceCategory::Journal => 0,
            SourceCategory::File => 1,
            SourceCategory::Container => 2,
        }
    }

    /// Next category (wraps around)
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous category (wraps around)
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Map a number key ('1'..'3') to a category
    pub fn from_digit(c: char) -> Option<Self> {
        let index = c.to_digit(10)? as usize;
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    /// Derive the user-facing name for an identifier in this category
    pub fn display_name_for(&self, identifier: &str) -> String {
        match self {
            SourceCategory::Journal => identifier
                .strip_suffix(".service")
                .filter(|name| !name.is_empty())
                .unwrap_or(identifier)
                .to_string(),
            SourceCategory::File | SourceCategory::Container => identifier.to_string(),
        }
    }
}

impl Default for SourceCategory {
    fn default() -> Self {
        if cfg!(target_os = "linux") {
            SourceCategory::Journal
        } else {
            SourceCategory::File
        }
    }
}

/// A single browsable log source
///
/// Identity is `(category, identifier)`. Sources are immutable once produced
/// and are rebuilt wholesale whenever a catalog is re-enumerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Category this source belongs to
    pub category: SourceCategory,
    /// Backend identifier (unit name, file path, container name)
    pub identifier: String,
    /// Name shown in the source list
    pub display_name: String,
}

impl Source {
    /// Create a source, deriving its display name from the category
    pub fn new(category: SourceCategory, identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();
        let display_name = category.display_name_for(&identifier);
        Self {
            category,
            identifier,
            display_name,
        }
    }

    /// Identity key used to match sources across re-enumerations
    pub fn key(&self) -> (SourceCategory, &str) {
        (self.category, self.identifier.as_str())
    }
}

/// Errors produced by source backends
#[derive(Debug, Error)]
pub enum SourceError {
    /// The backend command could not be started
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The backend command ran but exited unsuccessfully
    #[error("`{command}` exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// A log file could not be read
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Nothing to enumerate or fetch at the expected location
    #[error("{0}")]
    NotFound(String),

    /// The category has no backend on this platform
    #[error("{} sources are not available on this platform", .0.label())]
    Unsupported(SourceCategory),
}

/// Capability: list candidate source identifiers for a category
pub trait SourceEnumerator: Send + Sync {
    /// Produce identifiers for every available source in `category`.
    ///
    /// Order and duplicates do not matter; the catalog normalizes both.
    fn enumerate(&self, category: SourceCategory) -> Result<Vec<String>, SourceError>;
}

/// Capability: fetch the raw lines of one source
///
/// Dropping the returned future must cancel the read, including any child
/// process it started.
#[async_trait]
pub trait LineSource: Send + Sync {
    /// Return every line the backend emits for `source`, in emission order
    async fn fetch_lines(&self, source: &Source) -> Result<Vec<String>, SourceError>;
}

/// Split backend output into owned lines, tolerating invalid UTF-8
pub(crate) fn split_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_cycle() {
        assert_eq!(SourceCategory::Journal.next(), SourceCategory::File);
        assert_eq!(SourceCategory::Container.next(), SourceCategory::Journal);
        assert_eq!(SourceCategory::Journal.prev(), SourceCategory::Container);
        assert_eq!(SourceCategory::File.prev(), SourceCategory::Journal);
    }

    #[test]
    fn test_category_from_digit() {
        assert_eq!(SourceCategory::from_digit('1'), Some(SourceCategory::Journal));
        assert_eq!(SourceCategory::from_digit('3'), Some(SourceCategory::Container));
        assert_eq!(SourceCategory::from_digit('0'), None);
        assert_eq!(SourceCategory::from_digit('4'), None);
        assert_eq!(SourceCategory::from_digit('x'), None);
    }

    #[test]
    fn test_journal_display_name_strips_service_suffix() {
        let source = Source::new(SourceCategory::Journal, "sshd.service");
        assert_eq!(source.display_name, "sshd");
        assert_eq!(source.identifier, "sshd.service");

        let timer = Source::new(SourceCategory::Journal, "backup.timer");
        assert_eq!(timer.display_name, "backup.timer");

        let bare = Source::new(SourceCategory::Journal, ".service");
        assert_eq!(bare.display_name, ".service");
    }

    #[test]
    fn test_file_and_container_display_names() {
        let file = Source::new(SourceCategory::File, "/var/log/syslog");
        assert_eq!(file.display_name, "/var/log/syslog");

        let container = Source::new(SourceCategory::Container, "web-1");
        assert_eq!(container.display_name, "web-1");
    }

    #[test]
    fn test_source_key() {
        let source = Source::new(SourceCategory::Container, "db");
        assert_eq!(source.key(), (SourceCategory::Container, "db"));
    }

    #[test]
    fn test_split_lines_lossy() {
        let lines = split_lines(b"one\ntwo\r\nbad \xff byte\n");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "one");
        assert_eq!(lines[1], "two");
        assert!(lines[2].starts_with("bad "));
    }

    #[test]
    fn test_category_serde() {
        #[derive(Deserialize)]
        struct Wrapper {
            category: SourceCategory,
        }
        let parsed: Wrapper = toml::from_str("category = \"container\"").unwrap();
        assert_eq!(parsed.category, SourceCategory::Container);
    }
}
