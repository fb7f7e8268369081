use kido_engine::Stone;
use serde::{Deserialize, Serialize};

use crate::utils::generate_token;

/// A seat at a game. `session_id` is the bearer credential for that seat and
/// is never reissued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub session_id: String,
    pub name: String,
    pub color: Stone,
    pub captures: u32,
}

impl Player {
    /// Seat a new player with a fresh identity and session.
    pub fn new(name: &str, color: Stone) -> Self {
        Player {
            id: generate_token(),
            session_id: generate_token(),
            name: name.to_string(),
            color,
            captures: 0,
        }
    }

    /// Compare a presented session credential against the stored one.
    pub fn authenticates(&self, session_id: &str) -> bool {
        !self.session_id.is_empty() && self.session_id.as_bytes() == session_id.as_bytes()
    }

    /// Copy without the session credential, for showing to other clients.
    pub fn redacted(&self) -> Player {
        Player {
            session_id: String::new(),
            ..self.clone()
        }
    }
}
