use std::fmt;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kido_engine::GoError;
use serde_json::json;

use crate::store::StoreError;

/// Why a move was refused. Codes and messages are shown to players and must
/// stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    NotActive,
    Rules(GoError),
}

impl IllegalMove {
    pub fn code(&self) -> &'static str {
        match self {
            IllegalMove::NotActive => "not_active",
            IllegalMove::Rules(e) => e.code(),
        }
    }
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::NotActive => write!(f, "Game is not active."),
            IllegalMove::Rules(e) => write!(f, "{e}"),
        }
    }
}

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    Unauthorized(String),
    IllegalMove(IllegalMove),
    Persistence(StoreError),
    Internal(String),
}

impl AppError {
    /// Stable machine-readable code for the envelope.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "not_found",
            AppError::BadRequest(_) => "bad_request",
            AppError::Conflict(_) => "conflict",
            AppError::Unauthorized(_) => "unauthorized",
            AppError::IllegalMove(m) => m.code(),
            AppError::Persistence(_) => "persistence_failure",
            AppError::Internal(_) => "internal",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::IllegalMove(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Persistence(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to clients.
    fn public_message(&self) -> String {
        match self {
            AppError::NotFound(msg)
            | AppError::BadRequest(msg)
            | AppError::Conflict(msg)
            | AppError::Unauthorized(msg) => msg.clone(),
            AppError::IllegalMove(m) => m.to_string(),
            AppError::Persistence(e) => {
                tracing::error!("Persistence error: {e}");
                "Failed to save game state".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                "Internal server error".to_string()
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {msg}"),
            AppError::BadRequest(msg) => write!(f, "Bad request: {msg}"),
            AppError::Conflict(msg) => write!(f, "Conflict: {msg}"),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {msg}"),
            AppError::IllegalMove(m) => write!(f, "Illegal move: {m}"),
            AppError::Persistence(e) => write!(f, "Persistence error: {e}"),
            AppError::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<IllegalMove> for AppError {
    fn from(m: IllegalMove) -> Self {
        AppError::IllegalMove(m)
    }
}

impl From<GoError> for AppError {
    fn from(e: GoError) -> Self {
        AppError::IllegalMove(IllegalMove::Rules(e))
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Persistence(e)
    }
}

/// JSON-returning error type for API routes.
/// Wraps AppError and returns `{"success": false, "error": "...", "code": "..."}`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let body = json!({
            "success": false,
            "error": self.0.public_message(),
            "code": self.0.code(),
        });
        (status, Json(body)).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(e: AppError) -> Self {
        ApiError(e)
    }
}
