//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Display and runtime settings for the game.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Show the move list oldest first.
    #[serde(default = "default_ascending")]
    ascending: bool,

    /// Append the placed coordinate to each move label.
    #[serde(default = "default_show_coordinates")]
    show_coordinates: bool,

    /// Terminal event poll interval in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    tick_rate_ms: u64,

    /// Where the interactive game writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_ascending() -> bool {
    true
}

fn default_show_coordinates() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_log_file() -> PathBuf {
    PathBuf::from("rewind_games.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ascending: default_ascending(),
            show_coordinates: default_show_coordinates(),
            tick_rate_ms: default_tick_rate_ms(),
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if given, otherwise returns the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Returns a copy with the move list order overridden.
    pub fn with_ascending(mut self, ascending: bool) -> Self {
        self.ascending = ascending;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = AppConfig::from_toml("ascending = false\ntick_rate_ms = 250\n").unwrap();
        assert!(!config.ascending());
        assert_eq!(*config.tick_rate_ms(), 250);
        assert!(*config.show_coordinates());
        assert_eq!(config.log_file(), &PathBuf::from("rewind_games.log"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = AppConfig::from_toml("colour = \"red\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "show_coordinates = false").unwrap();
        writeln!(file, "log_file = \"/tmp/rewind.log\"").unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert!(!config.show_coordinates());
        assert_eq!(config.log_file(), &PathBuf::from("/tmp/rewind.log"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = AppConfig::from_file(&path).unwrap_err();
        assert!(err.message.contains("nope.toml"));
    }

    #[test]
    fn test_no_path_uses_defaults() {
        assert_eq!(AppConfig::load(None).unwrap(), AppConfig::default());
    }
}
