// CLI configuration loading

use crate::store::TASKS_KEY;
use eyre::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Ambient CLI configuration, read from `<config dir>/darkneo/config.yaml`.
///
/// Every field has a default, and a missing or unreadable file falls back
/// to defaults rather than failing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the task list file lives in.
    pub data_dir: PathBuf,
    /// Store key (and file stem) the task list is persisted under.
    pub key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            key: TASKS_KEY.to_string(),
        }
    }
}

impl Config {
    /// Load the config file if present; fall back to defaults on any failure.
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::read(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable config file");
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).context("Failed to read config file")?;
        serde_yaml::from_str(&raw).context("Failed to parse config file")
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("darkneo").join("config.yaml"))
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("darkneo"))
        .unwrap_or_else(|| PathBuf::from(".darkneo"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.key, TASKS_KEY);
        assert!(!config.data_dir.as_os_str().is_empty());
    }

    #[test]
    fn test_read_full_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "data_dir: /tmp/darkneo\nkey: todos_v2\n").unwrap();

        let config = Config::read(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/darkneo"));
        assert_eq!(config.key, "todos_v2");
    }

    #[test]
    fn test_read_partial_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "data_dir: /tmp/darkneo\n").unwrap();

        let config = Config::read(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/darkneo"));
        assert_eq!(config.key, TASKS_KEY);
    }

    #[test]
    fn test_read_malformed_config_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "data_dir: [unclosed\n").unwrap();
        assert!(Config::read(&path).is_err());
    }
}
