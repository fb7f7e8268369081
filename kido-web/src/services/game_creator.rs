use chrono::{DateTime, Utc};
use kido_engine::Stone;

use crate::error::AppError;
use crate::models::game::{GameState, GameStatus};
use crate::models::player::Player;
use crate::utils::generate_token;

/// Open a new game with the creator seated as black.
pub fn new_game(player_name: &str, now: DateTime<Utc>) -> (GameState, Player) {
    let player = Player::new(player_name, Stone::Black);
    let game = GameState::new(generate_token(), player.clone(), now);
    (game, player)
}

/// Seat a second player as white and start play.
pub fn seat_opponent(
    game: &GameState,
    player_name: &str,
    now: DateTime<Utc>,
) -> Result<(GameState, Player), AppError> {
    if game.is_full() {
        return Err(AppError::Conflict("Game is full.".to_string()));
    }

    let player = Player::new(player_name, Stone::White);
    let mut next = game.clone();
    next.players.push(player.clone());
    next.game_status = GameStatus::Playing;
    next.updated_at = now;
    Ok((next, player))
}
