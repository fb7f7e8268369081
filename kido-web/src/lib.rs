use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod utils;

use services::authority::Authority;

#[derive(Clone)]
pub struct AppState {
    pub authority: Authority,
}

pub fn build_router(authority: Authority) -> Router {
    let state = AppState { authority };

    Router::new()
        .nest("/api", routes::api::router())
        .route("/up", get(routes::health::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
