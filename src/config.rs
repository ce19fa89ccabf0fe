//! Configuration loading and validation.
//!
//! Loads `config.toml` with per-section defaults. All sections use
//! `#[serde(default)]` so a minimal or empty config file is valid.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::chat::templates::GREETING_SYNONYMS;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Chat engine settings.
    #[serde(default)]
    pub chat: ChatConfig,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Chat engine settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Synonyms the greeting reply opens with.
    #[serde(default = "default_greetings")]
    pub greetings: Vec<String>,

    /// Number of earlier turns a chat session forwards as context.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Characters of each message included in the request log line.
    #[serde(default = "default_log_preview_chars")]
    pub log_preview_chars: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greetings: default_greetings(),
            history_limit: default_history_limit(),
            log_preview_chars: default_log_preview_chars(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    /// Directory for rotating JSON logs in `serve` mode. Stderr only if unset.
    #[serde(default)]
    pub json_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json_dir: None,
        }
    }
}

impl Config {
    /// Validate that configuration values are within sane bounds.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.chat.greetings.is_empty(),
            "chat.greetings must not be empty"
        );
        anyhow::ensure!(
            self.chat.greetings.iter().all(|g| !g.trim().is_empty()),
            "chat.greetings must not contain blank entries"
        );
        anyhow::ensure!(
            (1..=100).contains(&self.chat.history_limit),
            "chat.history_limit must be in [1, 100]"
        );
        anyhow::ensure!(
            self.chat.log_preview_chars >= 1,
            "chat.log_preview_chars must be >= 1"
        );
        anyhow::ensure!(
            !self.logging.level.trim().is_empty(),
            "logging.level must not be empty"
        );
        Ok(())
    }
}

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or fails validation.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config at {}", path.display()))?;
    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config at {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

/// Load `~/.college-buddy/config.toml`, falling back to defaults when the
/// file does not exist.
///
/// # Errors
///
/// Returns an error if the home directory is unknown, or the file exists
/// but cannot be loaded.
pub fn load_default_config() -> anyhow::Result<Config> {
    let path = config_dir()?.join("config.toml");
    if !path.exists() {
        return Ok(Config::default());
    }
    load_config(&path)
}

/// Resolve the default config directory (`~/.college-buddy/`).
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn config_dir() -> anyhow::Result<PathBuf> {
    let home = directories::BaseDirs::new()
        .ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
    Ok(home.home_dir().join(".college-buddy"))
}

// Default value functions for serde.

fn default_greetings() -> Vec<String> {
    GREETING_SYNONYMS.iter().map(|s| (*s).to_owned()).collect()
}

fn default_history_limit() -> usize {
    10
}

fn default_log_preview_chars() -> usize {
    50
}

fn default_level() -> String {
    "info".to_owned()
}
