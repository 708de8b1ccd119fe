//! Registry mapping game identifiers to engines.
//!
//! The registry is an ordinary value built at startup and handed to whatever
//! drives game selection. Registering an id that is already present replaces
//! the previous engine in place, so listing order stays the order in which ids
//! were first seen.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};

use crate::config::GamesConfig;
use crate::error::{GameError, GameResult};
use crate::game::connect_four::{ConnectFour, CONNECT_FOUR_ID};
use crate::game::erased::{AnyGameEngine, EngineAdapter};
use crate::game::prompt::PromptOptions;
use crate::game::tictactoe::{TicTacToe, TICTACTOE_ID};
use crate::game::traits::GameEngine;

/// Identifiers of the engines shipped with this crate
pub const BUILTIN_GAMES: [&str; 2] = [TICTACTOE_ID, CONNECT_FOUR_ID];

/// Lookup table from game identifier to engine
#[derive(Clone, Default)]
pub struct GameRegistry {
    engines: Vec<Arc<dyn AnyGameEngine>>,
    index: HashMap<String, usize>,
}

impl GameRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in engine with default prompt options
    pub fn with_builtin_games() -> Self {
        let mut registry = Self::new();
        registry.register(TicTacToe::new());
        registry.register(ConnectFour::new());
        registry
    }

    /// Registry holding the built-in engines enabled in `config`
    pub fn from_config(config: &GamesConfig, prompt: PromptOptions) -> GameResult<Self> {
        let mut registry = Self::new();

        for id in &config.enabled {
            match id.as_str() {
                TICTACTOE_ID => registry.register(TicTacToe::with_prompt_options(prompt)),
                CONNECT_FOUR_ID => registry.register(ConnectFour::with_prompt_options(prompt)),
                other => {
                    return Err(GameError::Configuration {
                        message: format!(
                            "Unknown game '{}', expected one of: {}",
                            other,
                            BUILTIN_GAMES.join(", ")
                        ),
                        field: "games.enabled".to_string(),
                    })
                }
            }
        }

        info!(games = ?registry.ids(), "Game registry initialized");
        Ok(registry)
    }

    /// Register a typed engine under its own id, replacing any previous one
    pub fn register<G: GameEngine + 'static>(&mut self, engine: G) {
        self.register_shared(Arc::new(EngineAdapter::new(engine)));
    }

    /// Register an already erased engine under its own id, replacing any previous one
    pub fn register_shared(&mut self, engine: Arc<dyn AnyGameEngine>) {
        let id = engine.id().to_string();

        match self.index.get(&id) {
            Some(&slot) => {
                warn!(
                    game_id = %id,
                    previous = %self.engines[slot].name(),
                    replacement = %engine.name(),
                    "Replacing registered game engine"
                );
                self.engines[slot] = engine;
            }
            None => {
                self.index.insert(id, self.engines.len());
                self.engines.push(engine);
            }
        }
    }

    /// Look up an engine; `None` when nothing is registered under `id`
    pub fn get(&self, id: &str) -> Option<Arc<dyn AnyGameEngine>> {
        self.index.get(id).map(|&slot| Arc::clone(&self.engines[slot]))
    }

    /// All registered engines
    pub fn all(&self) -> Vec<Arc<dyn AnyGameEngine>> {
        self.engines.clone()
    }

    /// Registered identifiers
    pub fn ids(&self) -> Vec<&str> {
        self.engines.iter().map(|engine| engine.id()).collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}

impl std::fmt::Debug for GameRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameRegistry")
            .field("games", &self.ids())
            .finish()
    }
}
