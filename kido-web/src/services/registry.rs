use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::game::{GameState, GameSummary};

/// Every game the authority knows about, keyed by game id. Serialized as a
/// single JSON object, which is the unit of persistence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    games: HashMap<String, GameState>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn get(&self, game_id: &str) -> Option<&GameState> {
        self.games.get(game_id)
    }

    /// Insert or replace a game, returning the entry it displaced.
    pub fn insert(&mut self, game: GameState) -> Option<GameState> {
        self.games.insert(game.game_id.clone(), game)
    }

    pub fn remove(&mut self, game_id: &str) -> Option<GameState> {
        self.games.remove(game_id)
    }

    /// Lobby rows in registry iteration order.
    pub fn summaries(&self) -> Vec<GameSummary> {
        self.games.values().map(GameState::summary).collect()
    }
}
