//! Real backends wired together from configuration

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::config::Config;

use super::{container, file, journal};
use super::{LineSource, Source, SourceCategory, SourceEnumerator, SourceError};

/// Service journals need systemd
fn journal_supported() -> bool {
    cfg!(target_os = "linux")
}

/// Enumerates and reads sources from the local machine
#[derive(Debug, Clone)]
pub struct SystemSources {
    journal_command: String,
    unit_list_command: String,
    container_runtime: String,
    file_search_paths: Vec<PathBuf>,
    file_max_depth: usize,
    max_lines: Option<usize>,
}

impl SystemSources {
    /// Build backends from the application configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            journal_command: config.journal_command.clone(),
            unit_list_command: config.unit_list_command.clone(),
            container_runtime: config.container_runtime.clone(),
            file_search_paths: config.file_search_paths.clone(),
            file_max_depth: config.file_max_depth,
            max_lines: config.max_lines,
        }
    }
}

impl SourceEnumerator for SystemSources {
    fn enumerate(&self, category: SourceCategory) -> Result<Vec<String>, SourceError> {
        match category {
            SourceCategory::Journal if !journal_supported() => {
                Err(SourceError::Unsupported(category))
            }
            SourceCategory::Journal => journal::list_units(&self.unit_list_command),
            SourceCategory::File => {
                file::discover_files(&self.file_search_paths, self.file_max_depth)
            }
            SourceCategory::Container => container::list_containers(&self.container_runtime),
        }
    }
}

#[async_trait]
impl LineSource for SystemSources {
    async fn fetch_lines(&self, source: &Source) -> Result<Vec<String>, SourceError> {
        match source.category {
            SourceCategory::Journal if !journal_supported() => {
                Err(SourceError::Unsupported(source.category))
            }
            SourceCategory::Journal => {
                journal::read_unit(&self.journal_command, &source.identifier, self.max_lines)
                    .await
            }
            SourceCategory::File => {
                file::read_file(Path::new(&source.identifier), self.max_lines).await
            }
            SourceCategory::Container => {
                container::read_logs(&self.container_runtime, &source.identifier, self.max_lines)
                    .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn file_only_config(root: &Path) -> Config {
        Config {
            file_search_paths: vec![root.to_path_buf()],
            file_max_depth: 1,
            container_runtime: "logscope-no-such-runtime".to_string(),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_file_category_round_trip() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("app.log"), "first\nsecond\n").unwrap();
        let sources = SystemSources::from_config(&file_only_config(dir.path()));

        let ids = sources.enumerate(SourceCategory::File).unwrap();
        assert_eq!(ids.len(), 1);

        let source = Source::new(SourceCategory::File, ids[0].clone());
        let lines = sources.fetch_lines(&source).await.unwrap();
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[cfg(not(target_os = "linux"))]
    #[test]
    fn test_journal_unsupported_off_linux() {
        let dir = TempDir::new().unwrap();
        let sources = SystemSources::from_config(&file_only_config(dir.path()));
        let err = sources.enumerate(SourceCategory::Journal).unwrap_err();
        assert!(matches!(err, SourceError::Unsupported(SourceCategory::Journal)));
    }

    #[test]
    fn test_missing_container_runtime_fails_enumeration() {
        let dir = TempDir::new().unwrap();
        let sources = SystemSources::from_config(&file_only_config(dir.path()));
        assert!(sources.enumerate(SourceCategory::Container).is_err());
    }
}
