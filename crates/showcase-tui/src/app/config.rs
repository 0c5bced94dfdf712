//! TUI configuration persistence
//!
//! Loads user preferences such as the theme, the redraw tick and where logs
//! are written.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Configuration directory under ~/.config
const CONFIG_DIR_NAME: &str = "showcase";

/// Log file name under the local data directory
const LOG_FILE_NAME: &str = "showcase-tui.log";

/// Color theme selection
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ThemeChoice {
    #[default]
    Default,
    HighContrast,
}

/// TUI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TuiConfig {
    /// Color theme
    #[serde(default)]
    pub theme: ThemeChoice,

    /// Redraw tick in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Show the demo credential hint under the login form
    #[serde(default = "default_true")]
    pub show_login_hint: bool,

    /// Log file override
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Default tracing directive when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_true() -> bool {
    true
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::Default,
            tick_rate_ms: default_tick_rate_ms(),
            show_login_hint: true,
            log_file: None,
            log_filter: default_log_filter(),
        }
    }
}

impl TuiConfig {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        // Try XDG_CONFIG_HOME first, then fall back to ~/.config
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg_config).join(CONFIG_DIR_NAME));
        }

        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME))
    }

    /// Get the full config file path
    pub fn config_file_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default location
    ///
    /// Falls back to defaults when the file doesn't exist or can't be used.
    /// The error, if any, is handed back so it can be reported once logging
    /// is up.
    pub fn load() -> (Self, Option<ConfigError>) {
        Self::load_or_default(Self::config_file_path().as_deref())
    }

    /// Load configuration from `path`, falling back to defaults
    pub fn load_or_default(path: Option<&Path>) -> (Self, Option<ConfigError>) {
        match path {
            Some(path) if path.exists() => match Self::load_from(path) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(e)),
            },
            _ => (Self::default(), None),
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        serde_json::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Write configuration to a path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::Io(e.to_string()))?;
            }
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        fs::write(path, contents).map_err(|e| ConfigError::Io(e.to_string()))?;

        tracing::debug!("Saved config to {:?}", path);
        Ok(())
    }

    /// Redraw tick as a duration, never below 10ms
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }

    /// Where log output goes
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            dirs::data_local_dir().map(|d| d.join(CONFIG_DIR_NAME).join(LOG_FILE_NAME))
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert_eq!(config.theme, ThemeChoice::Default);
        assert_eq!(config.tick_rate(), Duration::from_millis(100));
        assert!(config.show_login_hint);
        assert!(config.log_file.is_none());
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_config_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = TuiConfig {
            theme: ThemeChoice::HighContrast,
            tick_rate_ms: 250,
            show_login_hint: false,
            log_file: Some(PathBuf::from("/tmp/showcase.log")),
            log_filter: "debug".to_string(),
        };
        config.save_to(&path).unwrap();

        let loaded = TuiConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.log_path(), Some(PathBuf::from("/tmp/showcase.log")));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: TuiConfig = serde_json::from_str(r#"{"theme":"high_contrast"}"#).unwrap();
        assert_eq!(parsed.theme, ThemeChoice::HighContrast);
        assert_eq!(parsed.tick_rate_ms, 100);
        assert!(parsed.show_login_hint);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let parsed: TuiConfig =
            serde_json::from_str(r#"{"tick_rate_ms":50,"window_size":[80,24]}"#).unwrap();
        assert_eq!(parsed.tick_rate_ms, 50);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            TuiConfig::load_from(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_malformed_default_file_reports_error_and_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "theme": "neon", "#).unwrap();

        let (config, error) = TuiConfig::load_or_default(Some(&path));
        assert_eq!(config, TuiConfig::default());
        assert!(matches!(error, Some(ConfigError::Parse(_))));
    }

    #[test]
    fn test_absent_default_file_is_silent() {
        let dir = tempdir().unwrap();
        let (config, error) = TuiConfig::load_or_default(Some(&dir.path().join("config.json")));
        assert_eq!(config, TuiConfig::default());
        assert!(error.is_none());

        let (_, error) = TuiConfig::load_or_default(None);
        assert!(error.is_none());
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            TuiConfig::load_from(&dir.path().join("absent.json")),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_tick_rate_floor() {
        let config = TuiConfig {
            tick_rate_ms: 0,
            ..TuiConfig::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(10));
    }
}
