use sqlx::postgres::{PgPool, PgPoolOptions};

pub type DbPool = PgPool;

/// The authority writes from a single task, so a handful of connections is
/// plenty.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Create the snapshot table if it does not exist yet.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    let sql = include_str!("../migrations/001_initial.sql");
    sqlx::raw_sql(sql).execute(pool).await?;
    Ok(())
}
