//! Configuration management for versus

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::logging::{LogFormat, LogOutput, LoggingConfig};
use crate::error::GameError;
use crate::game::prompt::PromptOptions;
use crate::game::registry::BUILTIN_GAMES;

const GAME_ID_PATTERN: &str = r"^[a-z][a-z0-9_]*$";

static GAME_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(GAME_ID_PATTERN).expect("game id pattern is a valid regex"));

fn check_game_id(id: &str, field: &str) -> Result<(), GameError> {
    if GAME_ID.is_match(id) {
        Ok(())
    } else {
        Err(GameError::Configuration {
            message: format!("Game id '{}' must match {}", id, GAME_ID_PATTERN),
            field: field.to_string(),
        })
    }
}

/// Main configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VersusConfig {
    /// Logging configuration
    pub logging: LogSettings,
    /// Which games are available
    pub games: GamesConfig,
    /// Sections included in AI prompts
    pub prompt: PromptOptions,
}

/// Logging settings as written in the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// One of trace, debug, info, warn, error
    pub level: String,
    /// `human` or `json`
    pub format: String,
    /// `stdout` or `stderr`
    pub output: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "human".to_string(),
            output: "stderr".to_string(),
        }
    }
}

/// Game selection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GamesConfig {
    /// Built-in games to register, in listing order
    pub enabled: Vec<String>,
    /// Game used when none is named
    pub default_game: String,
}

impl Default for GamesConfig {
    fn default() -> Self {
        Self {
            enabled: BUILTIN_GAMES.iter().map(|id| id.to_string()).collect(),
            default_game: BUILTIN_GAMES[0].to_string(),
        }
    }
}

impl VersusConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        let content = fs::read_to_string(path).map_err(|e| GameError::Configuration {
            message: format!("Failed to read config file: {}", e),
            field: "config_file".to_string(),
        })?;

        let config: VersusConfig = toml::from_str(&content).map_err(|e| GameError::Configuration {
            message: format!("Failed to parse config file: {}", e),
            field: "config_format".to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), GameError> {
        let content = toml::to_string_pretty(self).map_err(|e| GameError::Configuration {
            message: format!("Failed to serialize config: {}", e),
            field: "config_serialization".to_string(),
        })?;

        fs::write(path, content).map_err(|e| GameError::Configuration {
            message: format!("Failed to write config file: {}", e),
            field: "config_write".to_string(),
        })?;

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), GameError> {
        if self.logging.level.parse::<tracing::Level>().is_err() {
            return Err(GameError::Configuration {
                message: format!("Unknown log level '{}'", self.logging.level),
                field: "logging.level".to_string(),
            });
        }

        if !matches!(self.logging.format.as_str(), "human" | "json") {
            return Err(GameError::Configuration {
                message: format!("Log format must be human or json, got '{}'", self.logging.format),
                field: "logging.format".to_string(),
            });
        }

        if !matches!(self.logging.output.as_str(), "stdout" | "stderr") {
            return Err(GameError::Configuration {
                message: format!("Log output must be stdout or stderr, got '{}'", self.logging.output),
                field: "logging.output".to_string(),
            });
        }

        if self.games.enabled.is_empty() {
            return Err(GameError::Configuration {
                message: "At least one game must be enabled".to_string(),
                field: "games.enabled".to_string(),
            });
        }

        for id in &self.games.enabled {
            check_game_id(id, "games.enabled")?;

            if !BUILTIN_GAMES.contains(&id.as_str()) {
                return Err(GameError::Configuration {
                    message: format!("Unknown game '{}'", id),
                    field: "games.enabled".to_string(),
                });
            }
        }

        check_game_id(&self.games.default_game, "games.default_game")?;

        if !self.games.enabled.contains(&self.games.default_game) {
            return Err(GameError::Configuration {
                message: format!("Default game '{}' is not enabled", self.games.default_game),
                field: "games.default_game".to_string(),
            });
        }

        Ok(())
    }

    /// Logging setup derived from the `[logging]` section
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.logging.level.parse().unwrap_or(tracing::Level::INFO),
            format: LogFormat::from_name(&self.logging.format),
            output: match self.logging.output.as_str() {
                "stdout" => LogOutput::Stdout,
                _ => LogOutput::Stderr,
            },
        }
    }

    /// Create a development configuration with verbose logging
    pub fn development() -> Self {
        Self {
            logging: LogSettings {
                level: "debug".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
