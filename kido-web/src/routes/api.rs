use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::{ApiError, AppError};
use crate::models::game::{GameState, GameSummary};
use crate::services::authority::Seated;

const MAX_NAME_LEN: usize = 40;

// -- Envelope --

/// Success envelope. Failures are rendered by [`ApiError`] with
/// `success: false` and an `error` message.
#[derive(Serialize)]
struct Envelope<T> {
    success: bool,
    data: T,
}

fn ok<T: Serialize>(data: T) -> Json<Envelope<T>> {
    Json(Envelope {
        success: true,
        data,
    })
}

// -- Request types --

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerNameRequest {
    player_name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MoveRequest {
    player_id: Option<String>,
    session_id: Option<String>,
    row: Option<i32>,
    col: Option<i32>,
}

// -- Router --

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/games", get(list_games).post(create_game))
        .route("/games/{id}", get(get_game))
        .route("/games/{id}/join", post(join_game))
        .route("/games/{id}/move", post(play_move))
}

// -- Handlers --

async fn list_games(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<GameSummary>>>, ApiError> {
    let games = state.authority.list_games().await?;
    Ok(ok(games))
}

async fn create_game(
    State(state): State<AppState>,
    body: Result<Json<PlayerNameRequest>, JsonRejection>,
) -> Result<Json<Envelope<Seated>>, ApiError> {
    let name = player_name(body)?;
    let seated = state.authority.create_game(&name).await?;
    Ok(ok(public_seat(seated)))
}

async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<GameState>>, ApiError> {
    let game = state.authority.get_game(&id).await?;
    Ok(ok(game.redacted()))
}

async fn join_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<PlayerNameRequest>, JsonRejection>,
) -> Result<Json<Envelope<Seated>>, ApiError> {
    let name = player_name(body)?;
    let seated = state.authority.join_game(&id, &name).await?;
    Ok(ok(public_seat(seated)))
}

async fn play_move(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<Envelope<GameState>>, ApiError> {
    let Json(body) = body.map_err(bad_json)?;
    let (Some(player_id), Some(session_id), Some(row), Some(col)) =
        (body.player_id, body.session_id, body.row, body.col)
    else {
        return Err(AppError::BadRequest("Missing required move parameters".to_string()).into());
    };
    if player_id.is_empty() || session_id.is_empty() {
        return Err(AppError::BadRequest("Missing required move parameters".to_string()).into());
    }

    let game = state
        .authority
        .play_move(&id, &player_id, &session_id, row, col)
        .await?;
    Ok(ok(game.redacted()))
}

// -- Helpers --

fn bad_json(rejection: JsonRejection) -> ApiError {
    AppError::BadRequest(rejection.body_text()).into()
}

fn player_name(body: Result<Json<PlayerNameRequest>, JsonRejection>) -> Result<String, ApiError> {
    let Json(body) = body.map_err(bad_json)?;
    let name = body.player_name.unwrap_or_default().trim().to_string();
    if name.is_empty() {
        return Err(AppError::BadRequest("Player name is required".to_string()).into());
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::BadRequest(format!(
            "Player name too long (max {MAX_NAME_LEN} characters)"
        ))
        .into());
    }
    Ok(name)
}

/// The seated player keeps their credential; everyone else's is hidden.
fn public_seat(seated: Seated) -> Seated {
    Seated {
        game: seated.game.redacted(),
        player: seated.player,
    }
}
