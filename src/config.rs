//! Configuration management for logscope

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::source::file::default_search_paths;
use crate::source::SourceCategory;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Category shown at startup
    #[serde(default)]
    pub default_category: SourceCategory,

    /// Directories searched for log files (`~` is expanded)
    #[serde(default = "default_search_paths")]
    pub file_search_paths: Vec<PathBuf>,

    /// How deep to descend below each search directory
    #[serde(default = "default_file_max_depth")]
    pub file_max_depth: usize,

    /// Command used to read a unit's journal
    #[serde(default = "default_journal_command")]
    pub journal_command: String,

    /// Command used to list service units
    #[serde(default = "default_unit_list_command")]
    pub unit_list_command: String,

    /// Docker-compatible container CLI (docker, podman, nerdctl)
    #[serde(default = "default_container_runtime")]
    pub container_runtime: String,

    /// Keep only the last N lines of a source (unset = no truncation)
    #[serde(default)]
    pub max_lines: Option<usize>,

    /// Give up on a load after this many seconds (unset = wait forever)
    #[serde(default)]
    pub load_timeout_secs: Option<u64>,

    /// Lines per PageUp/PageDown before the first frame has been measured
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_file_max_depth() -> usize {
    2
}

fn default_journal_command() -> String {
    "journalctl".to_string()
}

fn default_unit_list_command() -> String {
    "systemctl".to_string()
}

fn default_container_runtime() -> String {
    "docker".to_string()
}

fn default_page_size() -> usize {
    20
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_category: SourceCategory::default(),
            file_search_paths: default_search_paths(),
            file_max_depth: default_file_max_depth(),
            journal_command: default_journal_command(),
            unit_list_command: default_unit_list_command(),
            container_runtime: default_container_runtime(),
            max_lines: None,
            load_timeout_secs: None,
            page_size: default_page_size(),
        }
    }
}

impl Config {
    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = config_file_path();
        if path.exists() {
            let content = std::fs::read_to_string(&path).context("Failed to read config file")?;
            Self::parse(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }
}

/// Get the base configuration directory (~/.logscope)
/// Falls back to ./.logscope if home directory cannot be determined
pub fn config_dir() -> PathBuf {
    try_config_dir().unwrap_or_else(|| {
        tracing::warn!("Could not determine home directory, using current directory for config");
        PathBuf::from(".logscope")
    })
}

/// Try to get the base configuration directory, returning None if home dir is unavailable
pub fn try_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".logscope"))
}

/// Get the path to the config file
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    config_dir().join("logs")
}

/// Ensure all required directories exist
pub fn ensure_directories() -> Result<()> {
    std::fs::create_dir_all(config_dir()).context("Failed to create config directory")?;
    std::fs::create_dir_all(logs_dir()).context("Failed to create logs directory")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.file_max_depth, 2);
        assert_eq!(config.container_runtime, "docker");
        assert_eq!(config.max_lines, None);
        assert_eq!(config.load_timeout_secs, None);
        assert!(!config.file_search_paths.is_empty());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.journal_command, "journalctl");
        assert_eq!(config.unit_list_command, "systemctl");
        assert_eq!(config.page_size, 20);
        assert_eq!(config.default_category, SourceCategory::default());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse(
            r#"
            default_category = "container"
            container_runtime = "podman"
            max_lines = 5000
            load_timeout_secs = 30
            file_search_paths = ["/srv/logs", "~/logs"]
            "#,
        )
        .unwrap();
        assert_eq!(config.default_category, SourceCategory::Container);
        assert_eq!(config.container_runtime, "podman");
        assert_eq!(config.max_lines, Some(5000));
        assert_eq!(config.load_timeout_secs, Some(30));
        assert_eq!(config.file_search_paths.len(), 2);
        assert_eq!(config.file_max_depth, 2);
    }

    #[test]
    fn test_invalid_category_is_error() {
        assert!(Config::parse("default_category = \"syslog\"").is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            max_lines: Some(100),
            ..Config::default()
        };
        let toml_str = toml::to_string(&config).unwrap();
        let parsed = Config::parse(&toml_str).unwrap();
        assert_eq!(parsed.max_lines, Some(100));
        assert_eq!(parsed.file_search_paths, config.file_search_paths);
    }

    #[test]
    fn test_config_dir_does_not_panic() {
        let dir = config_dir();
        assert!(dir.ends_with(".logscope"));
    }
}
