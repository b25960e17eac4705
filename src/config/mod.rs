//! Configuration management

use crate::report::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub probe: ProbeConfig,
    pub output: OutputConfig,
}

/// Probe settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Where to create the socket; relative paths resolve against the cwd
    pub socket_path: PathBuf,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            socket_path: PathBuf::from("test.sock"),
        }
    }
}

/// Output settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl Config {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load config from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        Self::parse(&content).with_context(|| format!("Invalid config file {:?}", path))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Get the config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sockprobe")
            .join("config.toml")
    }

    /// Get the socket path; relative paths are left to the OS to resolve
    pub fn socket_path(&self) -> &Path {
        &self.probe.socket_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.probe.socket_path, PathBuf::from("test.sock"));
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::parse("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.probe.socket_path, PathBuf::from("test.sock"));
    }

    #[test]
    fn test_empty_toml() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_malformed_toml_is_error() {
        assert!(Config::parse("[probe\nsocket_path = 3").is_err());
        assert!(Config::parse("[output]\nformat = \"xml\"\n").is_err());
    }

    #[test]
    fn test_socket_path_is_not_rewritten() {
        let mut config = Config::default();
        assert_eq!(config.socket_path(), Path::new("test.sock"));

        config.probe.socket_path = PathBuf::from("/run/app.sock");
        assert_eq!(config.socket_path(), Path::new("/run/app.sock"));
    }

    #[test]
    fn test_load_from_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from(&dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[probe]\nsocket_path = \"probe.sock\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.probe.socket_path, PathBuf::from("probe.sock"));
    }
}
