//! Object-safe view of a [`GameEngine`] so engines with different state and
//! move types can live side by side in one registry.
//!
//! State crosses this boundary as a [`serde_json::Value`] and moves as text,
//! which is the form an AI model produces them in.

use std::fmt;

use serde_json::Value;

use crate::error::{GameError, GameResult};
use crate::game::traits::{GameEngine, GameStatus};

/// Type-erased game engine
pub trait AnyGameEngine: Send + Sync {
    fn id(&self) -> &str;

    fn name(&self) -> &str;

    fn initial_state(&self) -> GameResult<Value>;

    /// Unparseable move text counts as an illegal move, not an error
    fn validate_move(&self, state: &Value, input: &str) -> GameResult<bool>;

    /// Validates before applying; rejects with `InvalidMove` or `IllegalMove`
    fn apply_move(&self, state: &Value, input: &str) -> GameResult<Value>;

    fn status(&self, state: &Value) -> GameResult<GameStatus>;

    fn serialize_state(&self, state: &Value) -> GameResult<String>;

    fn render_board(&self, state: &Value) -> GameResult<String>;

    fn side_to_move(&self, state: &Value) -> GameResult<String>;

    fn legal_moves(&self, state: &Value) -> GameResult<Vec<String>>;

    /// Every history entry must parse as a move of this game
    fn build_prompt(&self, state: &Value, history: &[String]) -> GameResult<String>;

    /// Canonical notation for move text
    fn normalize_move(&self, input: &str) -> GameResult<String>;
}

impl fmt::Debug for dyn AnyGameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyGameEngine")
            .field("id", &self.id())
            .field("name", &self.name())
            .finish()
    }
}

/// Adapts a typed [`GameEngine`] to [`AnyGameEngine`]
#[derive(Debug, Clone)]
pub struct EngineAdapter<G> {
    engine: G,
}

impl<G: GameEngine> EngineAdapter<G> {
    pub fn new(engine: G) -> Self {
        Self { engine }
    }

    /// The wrapped engine
    pub fn inner(&self) -> &G {
        &self.engine
    }

    fn decode(&self, state: &Value) -> GameResult<G::State> {
        let state: G::State = serde_json::from_value(state.clone()).map_err(|e| GameError::State {
            message: format!("state does not belong to {}: {}", self.engine.id(), e),
        })?;
        self.engine.check_state(&state)?;
        Ok(state)
    }

    fn encode(&self, state: &G::State) -> GameResult<Value> {
        Ok(serde_json::to_value(state)?)
    }
}

impl<G: GameEngine> AnyGameEngine for EngineAdapter<G> {
    fn id(&self) -> &str {
        self.engine.id()
    }

    fn name(&self) -> &str {
        self.engine.name()
    }

    fn initial_state(&self) -> GameResult<Value> {
        self.encode(&self.engine.initial_state())
    }

    fn validate_move(&self, state: &Value, input: &str) -> GameResult<bool> {
        let state = self.decode(state)?;
        match self.engine.parse_move(input) {
            Ok(mv) => Ok(self.engine.validate_move(&state, &mv)),
            Err(_) => Ok(false),
        }
    }

    fn apply_move(&self, state: &Value, input: &str) -> GameResult<Value> {
        let state = self.decode(state)?;
        let mv = self.engine.parse_move(input)?;
        if !self.engine.validate_move(&state, &mv) {
            return Err(GameError::illegal_move(self.engine.id(), &mv));
        }
        let next = self.engine.apply_move(&state, &mv)?;
        self.encode(&next)
    }

    fn status(&self, state: &Value) -> GameResult<GameStatus> {
        Ok(self.engine.status(&self.decode(state)?))
    }

    fn serialize_state(&self, state: &Value) -> GameResult<String> {
        Ok(self.engine.serialize_state(&self.decode(state)?))
    }

    fn render_board(&self, state: &Value) -> GameResult<String> {
        Ok(self.engine.render_board(&self.decode(state)?))
    }

    fn side_to_move(&self, state: &Value) -> GameResult<String> {
        Ok(self.engine.side_to_move(&self.decode(state)?))
    }

    fn legal_moves(&self, state: &Value) -> GameResult<Vec<String>> {
        let state = self.decode(state)?;
        Ok(self
            .engine
            .legal_moves(&state)
            .iter()
            .map(ToString::to_string)
            .collect())
    }

    fn build_prompt(&self, state: &Value, history: &[String]) -> GameResult<String> {
        let state = self.decode(state)?;
        let history = history
            .iter()
            .map(|text| self.engine.parse_move(text))
            .collect::<GameResult<Vec<_>>>()?;
        Ok(self.engine.build_prompt(&state, &history))
    }

    fn normalize_move(&self, input: &str) -> GameResult<String> {
        Ok(self.engine.parse_move(input)?.to_string())
    }
}
