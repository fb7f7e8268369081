use chrono::{DateTime, Utc};
use kido_engine::{GoError, Point};

use crate::error::{AppError, IllegalMove};
use crate::models::game::{GameState, GameStatus, LastMove, MoveRecord};

/// Validate a move against `game` and return the resulting state.
///
/// Checks run in order and the first failure wins: status, seat, session,
/// turn, then the rules engine (bounds, occupancy, ko, suicide). The input
/// game is never modified.
pub fn play_move(
    game: &GameState,
    player_id: &str,
    session_id: &str,
    row: i32,
    col: i32,
    now: DateTime<Utc>,
) -> Result<GameState, AppError> {
    if game.game_status != GameStatus::Playing {
        return Err(IllegalMove::NotActive.into());
    }

    let player = game
        .player(player_id)
        .ok_or_else(|| AppError::Unauthorized("Player not found in this game.".to_string()))?;

    if !player.authenticates(session_id) {
        return Err(AppError::Unauthorized("Authentication failed.".to_string()));
    }

    let stone = player.color;
    if stone != game.current_player {
        return Err(GoError::OutOfTurn.into());
    }

    let point = to_point(row, col)?;
    let placement = kido_engine::try_play(&game.board, game.previous_position(), point, stone)?;

    let mut next = game.clone();
    if let Some(p) = next.player_mut(player_id) {
        p.captures += placement.captured;
    }
    next.board = placement.goban.clone();
    next.current_player = stone.opp();
    next.turn += 1;
    next.last_move = Some(LastMove {
        row: point.0,
        col: point.1,
    });
    next.history.push(MoveRecord {
        row: point.0,
        col: point.1,
        color: stone,
        board: placement.goban,
    });
    next.updated_at = now;

    Ok(next)
}

fn to_point(row: i32, col: i32) -> Result<Point, GoError> {
    match (u8::try_from(row), u8::try_from(col)) {
        (Ok(r), Ok(c)) => Ok((r, c)),
        _ => Err(GoError::NotOnBoard),
    }
}
