use anyhow::Result;
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use versus::{GameSession, GameStatus};

use crate::config::ReplConfig;

#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    // Game Operations
    Move { input: String },
    Board,
    Prompt,
    Moves,
    History,
    Status,

    // System Operations
    Help,
    Quit,
}

/// Hot-seat REPL: both sides type their moves at the same terminal
pub struct ReplInterface {
    editor: DefaultEditor,
    config: ReplConfig,
    session: GameSession,
}

impl ReplInterface {
    pub fn new(session: GameSession, config: ReplConfig) -> Result<Self> {
        let mut editor = DefaultEditor::new()?;

        // Load history if configured
        if let Some(history_file) = &config.history_file {
            let _ = editor.load_history(history_file);
        }

        Ok(Self {
            editor,
            config,
            session,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.display_welcome();
        self.display_board()?;

        loop {
            let input = match self.read_input() {
                Ok(input) => input,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    println!("\nGoodbye!");
                    break;
                }
                Err(e) => return Err(e.into()),
            };

            if input.trim().is_empty() {
                continue;
            }
            let _ = self.editor.add_history_entry(input.as_str());

            match parse_command(&input) {
                ReplCommand::Quit => {
                    println!("Goodbye!");
                    break;
                }
                command => {
                    if let Err(e) = self.handle_command(command) {
                        eprintln!("{}", format!("Error: {}", e).red());
                    }
                }
            }
        }

        // Save history if configured
        if let Some(history_file) = &self.config.history_file {
            let _ = self.editor.save_history(history_file);
        }

        Ok(())
    }

    fn handle_command(&mut self, command: ReplCommand) -> Result<()> {
        match command {
            ReplCommand::Move { input } => {
                let status = self.session.submit_move(&input)?;
                self.display_board()?;
                self.display_status(&status);
            }
            ReplCommand::Board => self.display_board()?,
            ReplCommand::Prompt => println!("{}", self.session.prompt()?),
            ReplCommand::Moves => {
                println!("Legal moves: {}", self.session.legal_moves()?.join(", ").green());
            }
            ReplCommand::History => {
                if self.session.history().is_empty() {
                    println!("{}", "No moves yet".dimmed());
                }
                for record in self.session.history() {
                    println!("{:>3}. {} {}", record.ply, record.player.bold(), record.notation);
                }
            }
            ReplCommand::Status => {
                let status = self.session.status().clone();
                self.display_status(&status);
            }
            ReplCommand::Help => self.display_help(),
            ReplCommand::Quit => {}
        }
        Ok(())
    }

    fn display_welcome(&self) {
        let engine = self.session.engine();
        println!("{}", format!("Versus: {}", engine.name()).bright_blue().bold());
        println!("{}", "Hot-seat play, both sides enter moves here".cyan());
        println!("{}", "Type 'help' for available commands".dimmed());
        println!();
    }

    fn display_board(&self) -> Result<()> {
        println!("{}", self.session.board()?);
        println!("{}", self.session.serialized_state()?.dimmed());
        Ok(())
    }

    fn display_status(&self, status: &GameStatus) {
        match status {
            GameStatus::Ongoing => {
                let side = self.session.side_to_move().unwrap_or_default();
                println!("{}", format!("{} to move", side).yellow());
            }
            GameStatus::Win { winner } => println!("{}", format!("{} wins!", winner).green().bold()),
            GameStatus::Draw => println!("{}", "Draw".cyan().bold()),
        }
    }

    fn display_help(&self) {
        println!("{}", "Commands:".bold());
        println!("  <move>    play a move for the side to move");
        println!("  board     show the board");
        println!("  prompt    show the prompt an AI model would receive");
        println!("  moves     list legal moves");
        println!("  history   list moves played so far");
        println!("  status    show the game result");
        println!("  help      show this help");
        println!("  quit      leave the game");
    }

    fn read_input(&mut self) -> Result<String, ReadlineError> {
        let side = self.session.side_to_move().unwrap_or_default();
        let prompt = format!("{} {}{}", self.session.engine().id(), side, self.config.prompt_suffix);
        self.editor.readline(&prompt)
    }
}

/// Anything that is not a known command is treated as a move
pub fn parse_command(input: &str) -> ReplCommand {
    match input.trim().to_ascii_lowercase().as_str() {
        "board" => ReplCommand::Board,
        "prompt" => ReplCommand::Prompt,
        "moves" => ReplCommand::Moves,
        "history" => ReplCommand::History,
        "status" => ReplCommand::Status,
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" => ReplCommand::Quit,
        _ => ReplCommand::Move {
            input: input.trim().to_string(),
        },
    }
}
