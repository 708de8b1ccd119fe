//! Shared prompt layout for the built-in games

use serde::{Deserialize, Serialize};

/// Which optional sections a prompt includes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptOptions {
    /// List every legal move so the model can pick from it
    pub include_legal_moves: bool,
    /// Include the moves played so far
    pub include_history: bool,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            include_legal_moves: true,
            include_history: true,
        }
    }
}

/// Game-specific pieces of a prompt
#[derive(Debug, Clone)]
pub struct PromptParts<'a> {
    pub game_name: &'a str,
    pub rules: &'a str,
    pub side: &'a str,
    pub board: String,
    pub position: String,
    pub history: Vec<String>,
    pub legal_moves: Vec<String>,
    pub move_format: &'a str,
}

/// Lay out a prompt asking for the next move
pub fn compose(parts: &PromptParts<'_>, options: PromptOptions) -> String {
    let mut prompt = String::new();

    prompt.push_str(&format!("You are playing {} as {}.\n", parts.game_name, parts.side));
    prompt.push_str(&format!("Rules: {}\n\n", parts.rules));
    prompt.push_str("Current board:\n");
    prompt.push_str(parts.board.trim_end());
    prompt.push_str("\n\n");
    prompt.push_str(&format!("Position: {}\n", parts.position));

    if options.include_history {
        prompt.push_str(&format!("Moves so far: {}\n", format_history(&parts.history)));
    }

    if options.include_legal_moves {
        prompt.push_str(&format!("Legal moves: {}\n", parts.legal_moves.join(", ")));
    }

    prompt.push_str(&format!(
        "\nReply with your move only, {}. Do not add any other text.",
        parts.move_format
    ));
    prompt
}

/// Number moves in pairs, one pair per round: `1. b2 a1 2. c3`
pub fn format_history(history: &[String]) -> String {
    if history.is_empty() {
        return "none yet".to_string();
    }

    history
        .chunks(2)
        .enumerate()
        .map(|(round, pair)| format!("{}. {}", round + 1, pair.join(" ")))
        .collect::<Vec<_>>()
        .join(" ")
}
