use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use versus::error::logging;
use versus::{GameRegistry, GameSession, VersusConfig};

mod config;
mod repl;

use config::ReplConfig;
use repl::ReplInterface;

#[derive(Parser)]
#[command(name = "versus")]
#[command(about = "Turn-based games for AI models to play against each other")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List registered games
    List,

    /// Print the prompt an AI model would receive after the given moves
    Prompt {
        /// Game identifier
        game: String,
        /// Moves already played, in order
        moves: Vec<String>,
    },

    /// Play a hot-seat game in the terminal
    Play {
        /// Game identifier, defaults to the configured default game
        game: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Without a config file the VERSUS_LOG_* variables drive logging
    let (config, logging_ready) = match &cli.config {
        Some(path) => {
            let config = VersusConfig::from_file(path)?;
            let ready = logging::init_logging(config.logging_config());
            (config, ready)
        }
        None => (VersusConfig::default(), logging::init_from_env()),
    };
    logging_ready.map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    let registry = GameRegistry::from_config(&config.games, config.prompt)?;

    match cli.command {
        Command::List => {
            for engine in registry.all() {
                println!("{:<16} {}", engine.id(), engine.name());
            }
        }
        Command::Prompt { game, moves } => {
            let mut session = GameSession::open(&registry, &game)?;
            for mv in &moves {
                session.submit_move(mv)?;
            }
            println!("{}", session.prompt()?);
        }
        Command::Play { game } => {
            let game = game.unwrap_or_else(|| config.games.default_game.clone());
            let session = GameSession::open(&registry, &game)?;
            tracing::info!(session_id = %session.id, game_id = %game, "Starting hot-seat game");

            let mut repl = ReplInterface::new(session, ReplConfig::default())?;
            repl.run()?;
        }
    }

    Ok(())
}
