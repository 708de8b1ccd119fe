//! Game engine contract, registry and built-in games

pub mod traits;
pub mod erased;
pub mod registry;
pub mod prompt;
pub mod tictactoe;
pub mod connect_four;

// Re-export core traits
pub use traits::{GameEngine, GameStatus};
pub use erased::{AnyGameEngine, EngineAdapter};
pub use registry::{GameRegistry, BUILTIN_GAMES};
pub use prompt::PromptOptions;
pub use tictactoe::TicTacToe;
pub use connect_four::ConnectFour;
