use axum::extract::Request;
use kido_web::config::Config;
use kido_web::services::authority::Authority;
use kido_web::store::{MemoryStore, PgStore};
use tower::Layer as _;
use tower_http::normalize_path::NormalizePathLayer;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kido_web=debug,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();

    let authority = match config.database_url.as_deref() {
        Some(database_url) => {
            let pool = kido_web::db::create_pool(database_url, config.db_max_connections)
                .await
                .expect("Failed to create database pool");
            kido_web::db::run_migrations(&pool)
                .await
                .expect("Failed to run migrations");
            Authority::start(PgStore::new(pool), &config.registry_key, config.mailbox).await
        }
        None => {
            tracing::warn!("DATABASE_URL not set, games will not survive a restart");
            Authority::start(MemoryStore::new(), &config.registry_key, config.mailbox).await
        }
    }
    .expect("Failed to load game registry");

    let app = kido_web::build_router(authority);

    let addr = config.bind_addr();
    tracing::info!("Starting kido-web on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");

    let app = NormalizePathLayer::trim_trailing_slash().layer(app);
    axum::serve(
        listener,
        axum::ServiceExt::<Request>::into_make_service(app),
    )
    .await
    .expect("Server error");
}
