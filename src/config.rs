//! Configuration management for flowstep
//!
//! Optional TOML file with defaults for every field.
//! Location: `--config <FILE>` or `~/.flowstep/config.toml` when present.

use crate::errors::{Result, StepError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub picker: PickerConfig,
    pub foreach: ForeachConfig,
    pub http: HttpConfig,
}

/// File picker settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Base name of the copied file (extension is kept from the source)
    pub output_basename: String,
}

/// Foreach settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForeachConfig {
    /// Input files whose name contains this are not sent to the method
    pub input_skip_marker: String,
    /// Result links containing this are not downloaded
    pub result_skip_marker: String,
    /// Appended to the input stem to name the per-file output folder
    pub result_folder_suffix: String,
}

/// HTTP client settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Request timeout; transport default when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            output_basename: "outputFile".to_string(),
        }
    }
}

impl Default for ForeachConfig {
    fn default() -> Self {
        Self {
            input_skip_marker: "logFile.text".to_string(),
            result_skip_marker: "logFile.txt".to_string(),
            result_folder_suffix: "_result".to_string(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            user_agent: concat!("flowstep/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Config {
    /// Load configuration
    ///
    /// An explicit path must exist. Without one, the default location is
    /// read if present and built-in defaults are used otherwise. Nothing
    /// is written to disk.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Parse a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            StepError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&contents).map_err(|e| {
            StepError::ConfigError(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| StepError::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// `~/.flowstep/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".flowstep").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.picker.output_basename, "outputFile");
        assert_eq!(config.foreach.input_skip_marker, "logFile.text");
        assert_eq!(config.foreach.result_skip_marker, "logFile.txt");
        assert_eq!(config.foreach.result_folder_suffix, "_result");
        assert!(config.http.timeout().is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            [http]
            timeout_secs = 30

            [picker]
            output_basename = "picked"
            "#,
        )
        .unwrap();

        assert_eq!(config.http.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.picker.output_basename, "picked");
        assert_eq!(config.foreach, ForeachConfig::default());
        assert!(config.http.user_agent.starts_with("flowstep/"));
    }

    #[test]
    fn test_invalid_toml() {
        let result = Config::from_toml("[picker\noutput_basename = 1");
        assert!(matches!(result, Err(StepError::ConfigError(_))));
    }

    #[test]
    fn test_explicit_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = Config::load(Some(&temp.path().join("nope.toml")));
        assert!(matches!(result, Err(StepError::ConfigError(_))));
    }

    #[test]
    fn test_load_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[foreach]\nresult_folder_suffix = \"_out\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.foreach.result_folder_suffix, "_out");
        assert_eq!(config.foreach.result_skip_marker, "logFile.txt");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_string = toml::to_string(&config).unwrap();
        let parsed = Config::from_toml(&toml_string).unwrap();
        assert_eq!(parsed, config);
    }
}
