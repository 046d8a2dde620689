//! Application configuration.
//!
//! Loaded from an optional JSON file; every field has a default so a
//! missing file or a partial file is valid.

use crate::logging::default_log_level;
use crate::service::note_store::DEFAULT_NOTES_KEY;
use crate::service::theme::DEFAULT_THEME_KEY;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default SQLite file name for the key-value backend.
pub const DEFAULT_DB_FILE_NAME: &str = "notebox.sqlite3";
const DEFAULT_SYNC_DELAY_MS: u64 = 1500;

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_json::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config json: {err}"),
            Self::Invalid(details) => write!(f, "invalid config: {details}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Storage key of the serialized note collection.
    #[serde(default = "default_notes_key")]
    pub notes_key: String,
    /// Storage key of the theme preference.
    #[serde(default = "default_theme_key")]
    pub theme_key: String,
    #[serde(default = "default_db_file_name")]
    pub db_file_name: String,
    /// `trace|debug|info|warn|error`; build-mode default when absent.
    #[serde(default)]
    pub log_level: Option<String>,
    #[serde(default = "default_sync_delay_ms")]
    pub sync_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            notes_key: default_notes_key(),
            theme_key: default_theme_key(),
            db_file_name: default_db_file_name(),
            log_level: None,
            sync_delay_ms: default_sync_delay_ms(),
        }
    }
}

impl AppConfig {
    /// Parses and validates a JSON document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path`; a missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(raw) => Self::from_json_str(&raw),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.notes_key.trim().is_empty() || self.theme_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage keys must not be blank".to_string()));
        }
        if self.notes_key == self.theme_key {
            return Err(ConfigError::Invalid(format!(
                "notes_key and theme_key must differ, both are `{}`",
                self.notes_key
            )));
        }
        if self.db_file_name.trim().is_empty() {
            return Err(ConfigError::Invalid("db_file_name must not be blank".to_string()));
        }
        Ok(())
    }

    /// Effective log level string.
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(default_log_level())
    }

    pub fn sync_delay(&self) -> Duration {
        Duration::from_millis(self.sync_delay_ms)
    }

    /// Database path inside `data_dir`.
    pub fn db_path(&self, data_dir: impl AsRef<Path>) -> PathBuf {
        data_dir.as_ref().join(&self.db_file_name)
    }
}

fn default_notes_key() -> String {
    DEFAULT_NOTES_KEY.to_string()
}

fn default_theme_key() -> String {
    DEFAULT_THEME_KEY.to_string()
}

fn default_db_file_name() -> String {
    DEFAULT_DB_FILE_NAME.to_string()
}

fn default_sync_delay_ms() -> u64 {
    DEFAULT_SYNC_DELAY_MS
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError};

    #[test]
    fn partial_document_fills_defaults() {
        let config = AppConfig::from_json_str(r#"{"sync_delay_ms": 10}"#).unwrap();
        assert_eq!(config.notes_key, "notes");
        assert_eq!(config.theme_key, "theme");
        assert_eq!(config.db_file_name, "notebox.sqlite3");
        assert_eq!(config.sync_delay_ms, 10);
    }

    #[test]
    fn log_level_prefers_configured_value_over_default() {
        let config = AppConfig::from_json_str(r#"{"log_level": "debug"}"#).unwrap();
        assert_eq!(config.log_level(), "debug");

        let config = AppConfig::from_json_str("{}").unwrap();
        assert_eq!(config.log_level(), crate::logging::default_log_level());
    }

    #[test]
    fn identical_keys_are_rejected() {
        let err = AppConfig::from_json_str(r#"{"notes_key": "x", "theme_key": "x"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = AppConfig::from_json_str("{").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(dir.path().join("absent.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
