//! Error types for the versus game engine library

use thiserror::Error;

use crate::game::GameStatus;

/// Main error type for game engines, the registry and sessions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("No game registered under id '{id}'")]
    UnknownGame { id: String },

    #[error("Invalid move '{input}' for {game}: {reason}")]
    InvalidMove {
        game: String,
        input: String,
        reason: String,
    },

    #[error("Illegal move '{notation}' for {game}")]
    IllegalMove { game: String, notation: String },

    #[error("Game is already over: {status}")]
    GameOver { status: GameStatus },

    #[error("State error: {message}")]
    State { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String, field: String },
}

impl GameError {
    /// Shorthand for an unparseable move
    pub fn invalid_move(game: &str, input: &str, reason: impl Into<String>) -> Self {
        GameError::InvalidMove {
            game: game.to_string(),
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Shorthand for a move that parses but breaks the rules
    pub fn illegal_move(game: &str, notation: impl ToString) -> Self {
        GameError::IllegalMove {
            game: game.to_string(),
            notation: notation.to_string(),
        }
    }

    /// Whether the error was caused by the move text rather than the caller
    pub fn is_move_rejection(&self) -> bool {
        matches!(self, GameError::InvalidMove { .. } | GameError::IllegalMove { .. })
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Type alias for the main result type used throughout the library
pub type GameResult<T> = Result<T, GameError>;

/// Logging configuration and initialization
pub mod logging {
    use std::env;
    use tracing::Level;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    /// Logging output format
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum LogFormat {
        Human,
        Json,
    }

    impl LogFormat {
        /// Parse a format name, falling back to human-readable output
        pub fn from_name(name: &str) -> Self {
            match name.trim().to_ascii_lowercase().as_str() {
                "json" => LogFormat::Json,
                _ => LogFormat::Human,
            }
        }
    }

    /// Logging output destination
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum LogOutput {
        Stdout,
        Stderr,
    }

    /// Logging configuration
    #[derive(Debug, Clone)]
    pub struct LoggingConfig {
        pub level: Level,
        pub format: LogFormat,
        pub output: LogOutput,
    }

    impl Default for LoggingConfig {
        fn default() -> Self {
            Self {
                level: Level::INFO,
                format: LogFormat::Human,
                output: LogOutput::Stderr,
            }
        }
    }

    /// Initialize structured logging with the given configuration
    pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let env_filter = EnvFilter::builder()
            .with_default_directive(config.level.into())
            .from_env_lossy();

        let registry = tracing_subscriber::registry().with(env_filter);

        match config.format {
            LogFormat::Human => {
                let fmt_layer = fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true);

                match config.output {
                    LogOutput::Stdout => registry.with(fmt_layer.with_writer(std::io::stdout)).try_init()?,
                    LogOutput::Stderr => registry.with(fmt_layer.with_writer(std::io::stderr)).try_init()?,
                }
            }
            LogFormat::Json => {
                let fmt_layer = fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_span_events(fmt::format::FmtSpan::CLOSE);

                match config.output {
                    LogOutput::Stdout => registry.with(fmt_layer.with_writer(std::io::stdout)).try_init()?,
                    LogOutput::Stderr => registry.with(fmt_layer.with_writer(std::io::stderr)).try_init()?,
                }
            }
        }

        Ok(())
    }

    impl LoggingConfig {
        /// Build from `VERSUS_LOG_LEVEL`, `VERSUS_LOG_FORMAT` and
        /// `VERSUS_LOG_OUTPUT` as returned by `lookup`; unset or unknown
        /// values keep their defaults
        pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
            let defaults = Self::default();

            let level = lookup("VERSUS_LOG_LEVEL")
                .and_then(|name| name.parse::<Level>().ok())
                .unwrap_or(defaults.level);

            let format = lookup("VERSUS_LOG_FORMAT")
                .map(|name| LogFormat::from_name(&name))
                .unwrap_or(defaults.format);

            let output = match lookup("VERSUS_LOG_OUTPUT").as_deref() {
                Some("stdout") => LogOutput::Stdout,
                Some("stderr") => LogOutput::Stderr,
                _ => defaults.output,
            };

            Self { level, format, output }
        }
    }

    /// Initialize logging with environment-based configuration
    pub fn init_from_env() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        init_logging(LoggingConfig::from_vars(|key| env::var(key).ok()))
    }
}
