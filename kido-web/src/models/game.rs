use std::fmt;

use chrono::{DateTime, Utc};
use kido_engine::{Goban, Stone};
use serde::{Deserialize, Serialize};

use crate::models::player::Player;

pub const MAX_PLAYERS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Waiting,
    Playing,
    Finished,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Waiting => write!(f, "waiting"),
            GameStatus::Playing => write!(f, "playing"),
            GameStatus::Finished => write!(f, "finished"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastMove {
    pub row: u8,
    pub col: u8,
}

/// One accepted move and the board right after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub row: u8,
    pub col: u8,
    pub color: Stone,
    pub board: Goban,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub game_id: String,
    pub board: Goban,
    pub players: Vec<Player>,
    pub current_player: Stone,
    pub game_status: GameStatus,
    pub turn: u32,
    pub last_move: Option<LastMove>,
    pub history: Vec<MoveRecord>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Lobby row derived from a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub game_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player1_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player2_name: Option<String>,
    pub game_status: GameStatus,
    pub turn: u32,
}

impl GameState {
    /// A fresh game on an empty board with `creator` waiting for an opponent.
    pub fn new(game_id: String, creator: Player, now: DateTime<Utc>) -> Self {
        GameState {
            game_id,
            board: Goban::new(),
            players: vec![creator],
            current_player: Stone::Black,
            game_status: GameStatus::Waiting,
            turn: 1,
            last_move: None,
            history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= MAX_PLAYERS
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn player_mut(&mut self, player_id: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    /// The position that stood before the most recent move, if at least two
    /// moves were played. Ko compares candidates against this.
    pub fn previous_position(&self) -> Option<&Goban> {
        let idx = self.history.len().checked_sub(2)?;
        self.history.get(idx).map(|m| &m.board)
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            game_id: self.game_id.clone(),
            player1_name: self.players.first().map(|p| p.name.clone()),
            player2_name: self.players.get(1).map(|p| p.name.clone()),
            game_status: self.game_status,
            turn: self.turn,
        }
    }

    /// Copy with every player's session credential stripped.
    pub fn redacted(&self) -> GameState {
        GameState {
            players: self.players.iter().map(Player::redacted).collect(),
            ..self.clone()
        }
    }
}
