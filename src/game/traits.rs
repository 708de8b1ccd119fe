//! Core game trait that every game module implements

use std::fmt::{self, Debug, Display};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::GameResult;

/// Outcome of a game at a point in time, derived from state alone
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameStatus {
    /// No result yet, the side to move should play
    Ongoing,
    /// The named player has won
    Win { winner: String },
    /// Nobody won and no further moves are possible
    Draw,
}

impl GameStatus {
    /// Shorthand for a win by `winner`
    pub fn win(winner: impl Into<String>) -> Self {
        GameStatus::Win {
            winner: winner.into(),
        }
    }

    /// Check if the game has finished (won or drawn)
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    /// The winning player, if any
    pub fn winner(&self) -> Option<&str> {
        match self {
            GameStatus::Win { winner } => Some(winner),
            _ => None,
        }
    }
}

impl Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Win { winner } => write!(f, "{} wins", winner),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}

/// Core trait that all games must implement
///
/// Engines describe rules; they never hold game progress. Everything that
/// changes during play lives in `State`, which is passed in and returned by
/// value so a caller can keep any earlier position around.
pub trait GameEngine: Send + Sync {
    type State: Clone + Debug + PartialEq + Serialize + DeserializeOwned;
    type Move: Clone + Debug + PartialEq + Display;

    /// Unique identifier used as the registry key
    fn id(&self) -> &str;

    /// Name shown to users
    fn name(&self) -> &str;

    /// Starting position for a new game
    fn initial_state(&self) -> Self::State;

    /// Whether `mv` is legal from `state`
    fn validate_move(&self, state: &Self::State, mv: &Self::Move) -> bool;

    /// Play `mv` and return the resulting state.
    ///
    /// Fails with [`GameError::IllegalMove`](crate::GameError::IllegalMove)
    /// when `validate_move` would reject the move.
    fn apply_move(&self, state: &Self::State, mv: &Self::Move) -> GameResult<Self::State>;

    /// Current result of the game
    fn status(&self, state: &Self::State) -> GameStatus;

    /// Compact deterministic text form of the state, suitable for prompts
    fn serialize_state(&self, state: &Self::State) -> String;

    /// Text sent to an AI model to ask for its next move
    fn build_prompt(&self, state: &Self::State, history: &[Self::Move]) -> String;

    /// Parse move text as an AI model or a human would write it
    fn parse_move(&self, input: &str) -> GameResult<Self::Move>;

    /// Player whose turn it is
    fn side_to_move(&self, state: &Self::State) -> String;

    /// Every move `validate_move` accepts from `state`
    fn legal_moves(&self, state: &Self::State) -> Vec<Self::Move>;

    /// Reject a state whose shape no sequence of moves could produce.
    ///
    /// Called on every state decoded from outside the engine.
    fn check_state(&self, _state: &Self::State) -> GameResult<()> {
        Ok(())
    }

    /// Human-readable board
    fn render_board(&self, state: &Self::State) -> String {
        self.serialize_state(state)
    }
}
