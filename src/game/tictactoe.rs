//! Tic-tac-toe implementation of the game engine contract

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::game::prompt::{self, PromptOptions, PromptParts};
use crate::game::traits::{GameEngine, GameStatus};

pub const TICTACTOE_ID: &str = "tictactoe";

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

const FILES: [char; 3] = ['a', 'b', 'c'];

/// Player mark, X always moves first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other player
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Lowercase symbol used in the serialized board
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'x',
            Mark::O => 'o',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Board cells in row-major order from the top-left (a3) to the bottom-right (c1)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeState {
    pub cells: [Option<Mark>; 9],
    pub to_move: Mark,
}

impl TicTacToeState {
    fn line_winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|line| {
            let first = self.cells[line[0]]?;
            line.iter()
                .all(|&cell| self.cells[cell] == Some(first))
                .then_some(first)
        })
    }

    fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

/// A mark placed on one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TicTacToeMove {
    cell: usize,
}

impl TicTacToeMove {
    /// Move on a row-major cell index, `None` when off the board
    pub fn new(cell: usize) -> Option<Self> {
        (cell < 9).then_some(Self { cell })
    }

    /// Row-major cell index
    pub fn cell(&self) -> usize {
        self.cell
    }
}

impl fmt::Display for TicTacToeMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = FILES[self.cell % 3];
        let rank = 3 - self.cell / 3;
        write!(f, "{}{}", file, rank)
    }
}

/// Implementation of the GameEngine trait for tic-tac-toe
#[derive(Debug, Clone, Default)]
pub struct TicTacToe {
    prompt: PromptOptions,
}

impl TicTacToe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom prompt sections
    pub fn with_prompt_options(prompt: PromptOptions) -> Self {
        Self { prompt }
    }
}

impl GameEngine for TicTacToe {
    type State = TicTacToeState;
    type Move = TicTacToeMove;

    fn id(&self) -> &str {
        TICTACTOE_ID
    }

    fn name(&self) -> &str {
        "Tic-Tac-Toe"
    }

    fn initial_state(&self) -> Self::State {
        TicTacToeState {
            cells: [None; 9],
            to_move: Mark::X,
        }
    }

    fn validate_move(&self, state: &Self::State, mv: &Self::Move) -> bool {
        mv.cell < 9 && state.cells[mv.cell].is_none() && !self.status(state).is_over()
    }

    fn apply_move(&self, state: &Self::State, mv: &Self::Move) -> GameResult<Self::State> {
        if !self.validate_move(state, mv) {
            return Err(GameError::illegal_move(self.id(), mv));
        }

        let mut next = state.clone();
        next.cells[mv.cell] = Some(state.to_move);
        next.to_move = state.to_move.opponent();
        Ok(next)
    }

    fn status(&self, state: &Self::State) -> GameStatus {
        if let Some(mark) = state.line_winner() {
            GameStatus::win(mark.to_string())
        } else if state.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::Ongoing
        }
    }

    fn serialize_state(&self, state: &Self::State) -> String {
        let rows: Vec<String> = state
            .cells
            .chunks(3)
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or('.', Mark::symbol))
                    .collect()
            })
            .collect();
        format!("{} {}", rows.join("/"), state.to_move)
    }

    fn build_prompt(&self, state: &Self::State, history: &[Self::Move]) -> String {
        let side = state.to_move.to_string();
        let parts = PromptParts {
            game_name: self.name(),
            rules: "Players take turns placing their mark on an empty square of a 3x3 grid. \
                    X moves first. Three marks in a row, column or diagonal wins; \
                    a full board without a line is a draw.",
            side: &side,
            board: self.render_board(state),
            position: self.serialize_state(state),
            history: history.iter().map(ToString::to_string).collect(),
            legal_moves: self.legal_moves(state).iter().map(ToString::to_string).collect(),
            move_format: "as a square name from a1 to c3 (file a-c, rank 1-3)",
        };
        prompt::compose(&parts, self.prompt)
    }

    fn parse_move(&self, input: &str) -> GameResult<Self::Move> {
        let text = input.trim().to_ascii_lowercase();
        let chars: Vec<char> = text.chars().collect();

        let cell = match chars.as_slice() {
            [digit @ '1'..='9'] => *digit as usize - '1' as usize,
            [file @ 'a'..='c', rank @ '1'..='3'] => {
                let col = *file as usize - 'a' as usize;
                let row = 3 - (*rank as usize - '0' as usize);
                row * 3 + col
            }
            _ => {
                return Err(GameError::invalid_move(
                    self.id(),
                    input,
                    "expected a square a1-c3 or a cell number 1-9",
                ))
            }
        };

        Ok(TicTacToeMove { cell })
    }

    fn side_to_move(&self, state: &Self::State) -> String {
        state.to_move.to_string()
    }

    fn legal_moves(&self, state: &Self::State) -> Vec<Self::Move> {
        if self.status(state).is_over() {
            return Vec::new();
        }
        (0..9)
            .filter(|&cell| state.cells[cell].is_none())
            .map(|cell| TicTacToeMove { cell })
            .collect()
    }

    fn render_board(&self, state: &Self::State) -> String {
        let mut out = String::from("   a   b   c\n");
        for (row, cells) in state.cells.chunks(3).enumerate() {
            let marks: Vec<String> = cells
                .iter()
                .map(|cell| cell.map_or(" ".to_string(), |mark| mark.to_string()))
                .collect();
            out.push_str(&format!("{}  {}\n", 3 - row, marks.join(" | ")));
            if row < 2 {
                out.push_str("  ---+---+---\n");
            }
        }
        out
    }
}
