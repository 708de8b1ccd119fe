//! Reference game implementation for testing the framework

use std::fmt;

use serde::{Deserialize, Serialize};
use versus::{GameEngine, GameError, GameResult, GameStatus};

const PLAYERS: [&str; 2] = ["A", "B"];

/// Subtraction game: players alternately take 1 to 3 stones from a pile and
/// whoever takes the last stone wins
#[derive(Debug, Clone)]
pub struct Countdown {
    id: String,
    name: String,
    pub pile: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountdownState {
    pub remaining: u32,
    /// Index into `PLAYERS` of the side to move
    pub next: usize,
    /// Player who took the last stone
    pub taken_last: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountdownMove(pub u32);

impl fmt::Display for CountdownMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Countdown {
    /// Create a countdown game with a pile of 10
    pub fn new() -> Self {
        Self::labelled("countdown", "Countdown")
    }

    /// Same rules under a custom id and display name
    pub fn labelled(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            pile: 10,
        }
    }

    /// Create with a custom pile size
    pub fn with_pile(pile: u32) -> Self {
        Self {
            pile,
            ..Self::new()
        }
    }
}

impl GameEngine for Countdown {
    type State = CountdownState;
    type Move = CountdownMove;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn initial_state(&self) -> Self::State {
        CountdownState {
            remaining: self.pile,
            next: 0,
            taken_last: None,
        }
    }

    fn validate_move(&self, state: &Self::State, mv: &Self::Move) -> bool {
        (1..=3).contains(&mv.0) && mv.0 <= state.remaining
    }

    fn apply_move(&self, state: &Self::State, mv: &Self::Move) -> GameResult<Self::State> {
        if !self.validate_move(state, mv) {
            return Err(GameError::illegal_move(self.id(), mv));
        }
        let remaining = state.remaining - mv.0;
        Ok(CountdownState {
            remaining,
            next: 1 - state.next,
            taken_last: (remaining == 0).then_some(state.next),
        })
    }

    fn status(&self, state: &Self::State) -> GameStatus {
        match state.taken_last {
            Some(player) => GameStatus::win(PLAYERS[player]),
            None if state.remaining == 0 => GameStatus::Draw,
            None => GameStatus::Ongoing,
        }
    }

    fn serialize_state(&self, state: &Self::State) -> String {
        format!("{} {}", state.remaining, PLAYERS[state.next])
    }

    fn build_prompt(&self, state: &Self::State, history: &[Self::Move]) -> String {
        let taken: Vec<String> = history.iter().map(ToString::to_string).collect();
        format!(
            "Pile: {}. Taken so far: [{}]. You are {}. Take 1, 2 or 3.",
            state.remaining,
            taken.join(","),
            PLAYERS[state.next]
        )
    }

    fn parse_move(&self, input: &str) -> GameResult<Self::Move> {
        input
            .trim()
            .parse()
            .map(CountdownMove)
            .map_err(|_| GameError::invalid_move(self.id(), input, "expected a number"))
    }

    fn side_to_move(&self, state: &Self::State) -> String {
        PLAYERS[state.next].to_string()
    }

    fn legal_moves(&self, state: &Self::State) -> Vec<Self::Move> {
        (1..=3)
            .map(CountdownMove)
            .filter(|mv| self.validate_move(state, mv))
            .collect()
    }
}
