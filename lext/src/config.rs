//! Configuration module for the lext CLI.
//!
//! Settings come from `lext.toml`. Every field has a default, so an empty
//! file, a partial file or no file at all are all valid.

use dirs::{config_dir, home_dir};
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{LextError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "lext.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Number of files lexed in parallel.
    #[serde(default = "default_parallel_jobs")]
    pub jobs: usize,

    /// Token output settings for `tokenize`.
    #[serde(default)]
    pub output: OutputConfig,

    /// Settings for `check`.
    #[serde(default)]
    pub check: CheckConfig,
}

/// Token output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// `text` or `json`.
    #[serde(default = "default_format")]
    pub format: String,

    /// Include whitespace and comment tokens.
    #[serde(default = "default_true")]
    pub trivia: bool,

    /// Include the position of each token.
    #[serde(default)]
    pub spans: bool,
}

/// Settings for the `check` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckConfig {
    /// Fail the command when any input has lexical errors.
    #[serde(default = "default_true")]
    pub deny_errors: bool,

    /// Stop printing diagnostics after this many.
    #[serde(default)]
    pub max_errors: Option<usize>,
}

fn default_true() -> bool {
    true
}

/// One job per available CPU.
fn default_parallel_jobs() -> usize {
    get_num_cpus()
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            jobs: default_parallel_jobs(),
            output: OutputConfig::default(),
            check: CheckConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            trivia: true,
            spans: false,
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            deny_errors: true,
            max_errors: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/lext/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LextError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| LextError::Config(format!("Failed to parse configuration: {}", e)))?;
        if config.jobs == 0 {
            return Err(LextError::Config("jobs must be at least 1".to_string()));
        }
        Ok(config)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("lext").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("lext").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert!(config.jobs >= 1);
        assert_eq!(config.output.format, "text");
        assert!(config.output.trivia);
        assert!(!config.output.spans);
        assert!(config.check.deny_errors);
        assert_eq!(config.check.max_errors, None);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml(
            r#"
            jobs = 2

            [output]
            format = "json"

            [check]
            max_errors = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.jobs, 2);
        assert_eq!(config.output.format, "json");
        assert!(config.output.trivia);
        assert!(config.check.deny_errors);
        assert_eq!(config.check.max_errors, Some(10));
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let mut original = Config::default();
        original.verbose = true;
        original.output.spans = true;
        original.check.deny_errors = false;

        let text = toml::to_string_pretty(&original).unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), original);
    }

    #[test]
    fn test_load_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "verbose = true\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert!(config.verbose);
    }

    #[test]
    fn test_zero_jobs_rejected() {
        assert!(matches!(Config::from_toml("jobs = 0"), Err(LextError::Config(_))));
    }

    #[test]
    fn test_malformed_config_rejected() {
        assert!(matches!(Config::from_toml("jobs = \"many\""), Err(LextError::Config(_))));
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/lext.toml"));
        assert!(result.is_err());
    }
}
