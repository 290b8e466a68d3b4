//! Configuration loading for the photo frame fetcher
//!
//! Reads `config.json`, a JSON object where each recognized key wraps its
//! payload in a nested `value` field (the format used by the frame's settings
//! UI). The Unsplash API key may instead come from the `UNSPLASH_KEY`
//! environment variable.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Downloads allowed per run when `daily_limit` is not configured
pub const DEFAULT_DAILY_LIMIT: u32 = 50;

/// Environment variable consulted when the config file has no key
pub const KEY_ENV_VAR: &str = "UNSPLASH_KEY";

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A single setting wrapped in the settings UI's `{"value": ...}` envelope
#[derive(Debug, Clone, Deserialize)]
pub struct Setting<T> {
    pub value: T,
}

/// Parsed contents of `config.json`. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Unsplash API key
    #[serde(default)]
    pub unsplash_key: Option<Setting<String>>,
    /// Maximum number of downloads per run
    #[serde(default)]
    pub daily_limit: Option<Setting<u32>>,
}

impl Config {
    /// Loads configuration from the given path.
    ///
    /// A missing file is not an error; it yields an empty config so the
    /// environment fallback for the API key still applies.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    /// Resolves the API key: the configured value wins, otherwise the
    /// `UNSPLASH_KEY` environment variable. Empty strings count as absent.
    pub fn api_key(&self) -> Option<String> {
        self.resolve_api_key(std::env::var(KEY_ENV_VAR).ok())
    }

    /// Key resolution against an explicit environment value, separated out so
    /// tests don't have to mutate process-wide environment state.
    pub fn resolve_api_key(&self, env_key: Option<String>) -> Option<String> {
        self.unsplash_key
            .as_ref()
            .map(|setting| setting.value.clone())
            .filter(|key| !key.is_empty())
            .or_else(|| env_key.filter(|key| !key.is_empty()))
    }

    /// Returns the configured daily limit, or [`DEFAULT_DAILY_LIMIT`]
    pub fn daily_limit(&self) -> u32 {
        self.daily_limit
            .as_ref()
            .map(|setting| setting.value)
            .unwrap_or(DEFAULT_DAILY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(content: &str) -> (std::path::PathBuf, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("config.json");
        fs::write(&path, content).expect("Should write config");
        (path, temp_dir)
    }

    #[test]
    fn test_load_full_config() {
        let (path, _temp_dir) = write_config(
            r#"{"unsplash_key": {"value": "abc"}, "daily_limit": {"value": 3}}"#,
        );

        let config = Config::load(&path).expect("Load should succeed");

        assert_eq!(config.resolve_api_key(None).as_deref(), Some("abc"));
        assert_eq!(config.daily_limit(), 3);
    }

    #[test]
    fn test_missing_file_yields_empty_config() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        let config = Config::load(temp_dir.path().join("nope.json"))
            .expect("Missing file should not be an error");

        assert!(config.resolve_api_key(None).is_none());
        assert_eq!(config.daily_limit(), DEFAULT_DAILY_LIMIT);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let (path, _temp_dir) = write_config("{not json");

        let result = Config::load(&path);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let (path, _temp_dir) = write_config(
            r#"{"brightness": {"value": 80}, "daily_limit": {"value": 7}}"#,
        );

        let config = Config::load(&path).expect("Load should succeed");

        assert_eq!(config.daily_limit(), 7);
    }

    #[test]
    fn test_config_key_wins_over_environment() {
        let config: Config =
            serde_json::from_str(r#"{"unsplash_key": {"value": "from-config"}}"#).unwrap();

        let key = config.resolve_api_key(Some("from-env".to_string()));

        assert_eq!(key.as_deref(), Some("from-config"));
    }

    #[test]
    fn test_environment_fallback_when_config_has_no_key() {
        let config = Config::default();

        let key = config.resolve_api_key(Some("from-env".to_string()));

        assert_eq!(key.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_empty_config_key_falls_back_to_environment() {
        let config: Config =
            serde_json::from_str(r#"{"unsplash_key": {"value": ""}}"#).unwrap();

        let key = config.resolve_api_key(Some("from-env".to_string()));

        assert_eq!(key.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_no_key_anywhere_resolves_to_none() {
        let config = Config::default();
        assert!(config.resolve_api_key(None).is_none());
        assert!(config.resolve_api_key(Some(String::new())).is_none());
    }
}
