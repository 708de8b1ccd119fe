//! Connect four implementation of the game engine contract

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::game::prompt::{self, PromptOptions, PromptParts};
use crate::game::traits::{GameEngine, GameStatus};

pub const CONNECT_FOUR_ID: &str = "connect_four";

pub const COLUMNS: usize = 7;
pub const ROWS: usize = 6;

const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Disc colour, red always moves first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disc {
    Red,
    Yellow,
}

impl Disc {
    pub fn opponent(self) -> Self {
        match self {
            Disc::Red => Disc::Yellow,
            Disc::Yellow => Disc::Red,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Disc::Red => 'r',
            Disc::Yellow => 'y',
        }
    }
}

impl fmt::Display for Disc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disc::Red => write!(f, "R"),
            Disc::Yellow => write!(f, "Y"),
        }
    }
}

/// Columns left to right, each listing its discs from the bottom up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectFourState {
    pub columns: Vec<Vec<Disc>>,
    pub to_move: Disc,
}

impl ConnectFourState {
    /// Disc at `col`, `row` counted from the bottom
    pub fn disc_at(&self, col: usize, row: usize) -> Option<Disc> {
        self.columns.get(col).and_then(|column| column.get(row)).copied()
    }

    fn is_full(&self) -> bool {
        self.columns.iter().all(|column| column.len() >= ROWS)
    }

    fn four_in_a_row(&self) -> Option<Disc> {
        for col in 0..COLUMNS {
            for row in 0..ROWS {
                let Some(disc) = self.disc_at(col, row) else {
                    continue;
                };
                let connected = DIRECTIONS.iter().any(|&(dc, dr)| {
                    (1..4).all(|step| {
                        let c = col as isize + dc * step;
                        let r = row as isize + dr * step;
                        c >= 0 && r >= 0 && self.disc_at(c as usize, r as usize) == Some(disc)
                    })
                });
                if connected {
                    return Some(disc);
                }
            }
        }
        None
    }
}

/// A disc dropped into a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectFourMove {
    column: usize,
}

impl ConnectFourMove {
    /// Move on a zero-based column, `None` when off the board
    pub fn new(column: usize) -> Option<Self> {
        (column < COLUMNS).then_some(Self { column })
    }

    /// Zero-based column
    pub fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for ConnectFourMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column + 1)
    }
}

/// Implementation of the GameEngine trait for connect four
#[derive(Debug, Clone, Default)]
pub struct ConnectFour {
    prompt: PromptOptions,
}

impl ConnectFour {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prompt_options(prompt: PromptOptions) -> Self {
        Self { prompt }
    }
}

impl GameEngine for ConnectFour {
    type State = ConnectFourState;
    type Move = ConnectFourMove;

    fn id(&self) -> &str {
        CONNECT_FOUR_ID
    }

    fn name(&self) -> &str {
        "Connect Four"
    }

    fn initial_state(&self) -> Self::State {
        ConnectFourState {
            columns: vec![Vec::new(); COLUMNS],
            to_move: Disc::Red,
        }
    }

    fn validate_move(&self, state: &Self::State, mv: &Self::Move) -> bool {
        let has_room = state
            .columns
            .get(mv.column)
            .is_some_and(|column| column.len() < ROWS);
        has_room && !self.status(state).is_over()
    }

    fn apply_move(&self, state: &Self::State, mv: &Self::Move) -> GameResult<Self::State> {
        if !self.validate_move(state, mv) {
            return Err(GameError::illegal_move(self.id(), mv));
        }

        let mut next = state.clone();
        next.columns[mv.column].push(state.to_move);
        next.to_move = state.to_move.opponent();
        Ok(next)
    }

    fn status(&self, state: &Self::State) -> GameStatus {
        if let Some(disc) = state.four_in_a_row() {
            GameStatus::win(disc.to_string())
        } else if state.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::Ongoing
        }
    }

    fn check_state(&self, state: &Self::State) -> GameResult<()> {
        if state.columns.len() != COLUMNS {
            return Err(GameError::State {
                message: format!(
                    "{} board needs {} columns, got {}",
                    self.id(),
                    COLUMNS,
                    state.columns.len()
                ),
            });
        }

        if let Some(col) = state.columns.iter().position(|column| column.len() > ROWS) {
            return Err(GameError::State {
                message: format!("{} column {} holds more than {} discs", self.id(), col + 1, ROWS),
            });
        }

        Ok(())
    }

    fn serialize_state(&self, state: &Self::State) -> String {
        let rows: Vec<String> = (0..ROWS)
            .rev()
            .map(|row| {
                (0..COLUMNS)
                    .map(|col| state.disc_at(col, row).map_or('.', Disc::symbol))
                    .collect()
            })
            .collect();
        format!("{} {}", rows.join("/"), state.to_move)
    }

    fn build_prompt(&self, state: &Self::State, history: &[Self::Move]) -> String {
        let side = state.to_move.to_string();
        let parts = PromptParts {
            game_name: self.name(),
            rules: "Players take turns dropping a disc into one of seven columns; \
                    it falls to the lowest empty row. R moves first. Four discs in a line \
                    horizontally, vertically or diagonally wins; a full board is a draw.",
            side: &side,
            board: self.render_board(state),
            position: self.serialize_state(state),
            history: history.iter().map(ToString::to_string).collect(),
            legal_moves: self.legal_moves(state).iter().map(ToString::to_string).collect(),
            move_format: "as a column number from 1 to 7",
        };
        prompt::compose(&parts, self.prompt)
    }

    fn parse_move(&self, input: &str) -> GameResult<Self::Move> {
        let text = input.trim();
        let number: usize = text.parse().map_err(|_| {
            GameError::invalid_move(self.id(), input, "expected a column number 1-7")
        })?;

        number
            .checked_sub(1)
            .and_then(ConnectFourMove::new)
            .ok_or_else(|| GameError::invalid_move(self.id(), input, "column out of range 1-7"))
    }

    fn side_to_move(&self, state: &Self::State) -> String {
        state.to_move.to_string()
    }

    fn legal_moves(&self, state: &Self::State) -> Vec<Self::Move> {
        if self.status(state).is_over() {
            return Vec::new();
        }
        (0..COLUMNS)
            .filter(|&column| state.columns.get(column).is_some_and(|discs| discs.len() < ROWS))
            .map(|column| ConnectFourMove { column })
            .collect()
    }

    fn render_board(&self, state: &Self::State) -> String {
        let mut out = String::new();
        for row in (0..ROWS).rev() {
            out.push('|');
            for col in 0..COLUMNS {
                let cell = state
                    .disc_at(col, row)
                    .map_or(" ".to_string(), |disc| disc.to_string());
                out.push_str(&cell);
                out.push('|');
            }
            out.push('\n');
        }
        out.push_str(" 1 2 3 4 5 6 7\n");
        out
    }
}
