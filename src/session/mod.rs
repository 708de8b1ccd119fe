//! A single game in progress, driven entirely through the engine contract

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{GameError, GameResult};
use crate::game::{AnyGameEngine, GameRegistry, GameStatus};

/// One accepted move
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based move number counting both sides
    pub ply: usize,
    /// Side that played the move
    pub player: String,
    /// Canonical notation of the move
    pub notation: String,
    pub played_at: DateTime<Utc>,
}

/// Game session tracking state and move history
#[derive(Debug, Clone)]
pub struct GameSession {
    pub id: Uuid,
    engine: Arc<dyn AnyGameEngine>,
    state: Value,
    history: Vec<MoveRecord>,
    status: GameStatus,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

impl GameSession {
    /// Start a new game on `engine`
    pub fn new(engine: Arc<dyn AnyGameEngine>) -> GameResult<Self> {
        let state = engine.initial_state()?;
        let status = engine.status(&state)?;
        let now = Utc::now();
        let id = Uuid::new_v4();

        debug!(session_id = %id, game_id = %engine.id(), "Game session started");

        Ok(Self {
            id,
            engine,
            state,
            history: Vec::new(),
            status,
            created_at: now,
            last_activity: now,
        })
    }

    /// Start a new game on the engine registered under `game_id`
    pub fn open(registry: &GameRegistry, game_id: &str) -> GameResult<Self> {
        let engine = registry.get(game_id).ok_or_else(|| GameError::UnknownGame {
            id: game_id.to_string(),
        })?;
        Self::new(engine)
    }

    /// Play move text for the side to move.
    ///
    /// Rejected input leaves the session unchanged.
    pub fn submit_move(&mut self, input: &str) -> GameResult<GameStatus> {
        if self.status.is_over() {
            return Err(GameError::GameOver {
                status: self.status.clone(),
            });
        }

        let player = self.engine.side_to_move(&self.state)?;
        let next = self.engine.apply_move(&self.state, input)?;
        let notation = self.engine.normalize_move(input)?;
        let status = self.engine.status(&next)?;
        let now = Utc::now();

        self.history.push(MoveRecord {
            ply: self.history.len() + 1,
            player: player.clone(),
            notation: notation.clone(),
            played_at: now,
        });
        self.state = next;
        self.status = status.clone();
        self.last_activity = now;

        debug!(
            session_id = %self.id,
            game_id = %self.engine.id(),
            ply = self.history.len(),
            player = %player,
            notation = %notation,
            "Move accepted"
        );

        if status.is_over() {
            info!(
                session_id = %self.id,
                game_id = %self.engine.id(),
                plies = self.history.len(),
                result = %status,
                "Game finished"
            );
        }

        Ok(status)
    }

    /// Whether `input` would be accepted right now
    pub fn is_legal(&self, input: &str) -> GameResult<bool> {
        self.engine.validate_move(&self.state, input)
    }

    /// Prompt asking the side to move for its next move
    pub fn prompt(&self) -> GameResult<String> {
        self.engine.build_prompt(&self.state, &self.notations())
    }

    pub fn board(&self) -> GameResult<String> {
        self.engine.render_board(&self.state)
    }

    pub fn serialized_state(&self) -> GameResult<String> {
        self.engine.serialize_state(&self.state)
    }

    pub fn side_to_move(&self) -> GameResult<String> {
        self.engine.side_to_move(&self.state)
    }

    pub fn legal_moves(&self) -> GameResult<Vec<String>> {
        self.engine.legal_moves(&self.state)
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_over()
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Played moves in canonical notation
    pub fn notations(&self) -> Vec<String> {
        self.history.iter().map(|record| record.notation.clone()).collect()
    }

    /// Raw state as passed through the engine
    pub fn state(&self) -> &Value {
        &self.state
    }

    pub fn engine(&self) -> &Arc<dyn AnyGameEngine> {
        &self.engine
    }
}
