//! Optional settings, read from `~/.term-snake/config.toml`.
//!
//! Every key has a default, so a missing file or a partial one is fine:
//!
//! ```toml
//! # Milliseconds between snake moves
//! update_interval_ms = 100
//! # Milliseconds between redraws
//! render_interval_ms = 10
//! # Fixed food placement, for replaying a game (optional)
//! seed = 1234
//!
//! [log]
//! enabled = true
//! level = "info"
//! file = "/tmp/term-snake.log"
//! ```
//!
//! `TERM_SNAKE_CONFIG` points at a different file.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Result, SnakeError};

const CONFIG_ENV: &str = "TERM_SNAKE_CONFIG";
const APP_DIR: &str = ".term-snake";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub update_interval_ms: u64,
    pub render_interval_ms: u64,
    pub seed: Option<u64>,
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            update_interval_ms: 100,
            render_interval_ms: 10,
            seed: None,
            log: LogConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub enabled: bool,
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
    /// Defaults to `~/.term-snake/term-snake.log`.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LogConfig {
    pub fn file_path(&self) -> PathBuf {
        self.file
            .clone()
            .or_else(|| app_dir().map(|dir| dir.join("term-snake.log")))
            .unwrap_or_else(|| PathBuf::from("term-snake.log"))
    }
}

impl Config {
    /// Loads the config file, or the defaults if there is none.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                Self::from_toml_str(&content)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.update_interval_ms == 0 {
            return Err(SnakeError::Config("update_interval_ms must be at least 1".into()));
        }
        if self.render_interval_ms == 0 {
            return Err(SnakeError::Config("render_interval_ms must be at least 1".into()));
        }
        Ok(())
    }

    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms)
    }

    pub fn render_interval(&self) -> Duration {
        Duration::from_millis(self.render_interval_ms)
    }

    fn config_path() -> Option<PathBuf> {
        if let Some(path) = env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        app_dir().map(|dir| dir.join("config.toml"))
    }
}

fn app_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .map(|home| PathBuf::from(home).join(APP_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.update_interval(), Duration::from_millis(100));
        assert_eq!(config.render_interval(), Duration::from_millis(10));
        assert!(config.log.enabled);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::from_toml_str(
            r#"
            update_interval_ms = 80
            seed = 99

            [log]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.update_interval_ms, 80);
        assert_eq!(config.render_interval_ms, 10);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.log.level, "debug");
        assert!(config.log.enabled);
        assert_eq!(config.log.file, None);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = Config::from_toml_str("render_interval_ms = 0").unwrap_err();
        assert!(matches!(err, SnakeError::Config(_)));
        assert!(err.to_string().contains("render_interval_ms"));

        assert!(Config::from_toml_str("update_interval_ms = 0").is_err());
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = Config::from_toml_str("update_interval_ms = \"fast\"").unwrap_err();
        assert!(matches!(err, SnakeError::Config(_)));
    }

    #[test]
    fn explicit_log_file_wins() {
        let log = LogConfig { file: Some(PathBuf::from("/tmp/snake.log")), ..LogConfig::default() };
        assert_eq!(log.file_path(), PathBuf::from("/tmp/snake.log"));
    }
}
