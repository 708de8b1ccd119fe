//! Versus - a game engine contract for pitting AI models against each other
//!
//! Versus provides:
//! - A `GameEngine` trait every turn-based game implements
//! - A `GameRegistry` mapping game identifiers to engines
//! - `GameSession`, which drives one game through any registered engine
//! - Built-in tic-tac-toe and connect four engines

pub mod game;
pub mod session;
pub mod error;
pub mod config;

// Re-export commonly used types for convenience
pub use error::{GameError, GameResult};

// Re-export core game traits
pub use game::{AnyGameEngine, EngineAdapter, GameEngine, GameRegistry, GameStatus, PromptOptions};

// Re-export built-in games
pub use game::{ConnectFour, TicTacToe};

// Re-export session types
pub use session::{GameSession, MoveRecord};

// Re-export configuration interfaces
pub use config::{GamesConfig, LogSettings, VersusConfig};
