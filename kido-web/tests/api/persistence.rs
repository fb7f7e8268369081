use kido_web::store::{MemoryStore, PgStore, Store};
use testcontainers::runners::AsyncRunner;
use testcontainers_modules::postgres::Postgres;

use crate::common::TestServer;

/// Games survive a restart when the new server reads the same store.
#[tokio::test]
async fn restart_over_same_store() {
    let store = MemoryStore::new();

    let first = TestServer::start_with(store.clone()).await;
    let (black, white) = first.create_and_join().await;
    first.play_ok(&black, 3, 3).await;
    first.play_ok(&white, 4, 4).await;

    let second = TestServer::start_with(store).await;
    let game = second.game(&black.game_id).await;
    assert_eq!(game["turn"], 3);
    assert_eq!(game["board"][3][3], "black");

    // Stored credentials still authenticate.
    let game = second.play_ok(&black, 5, 5).await;
    assert_eq!(game["turn"], 4);
}

#[tokio::test]
#[ignore = "needs a Docker daemon"]
async fn postgres_store_round_trip() {
    let container = Postgres::default().start().await.unwrap();
    let host = container.get_host().await.unwrap();
    let port = container.get_host_port_ipv4(5432).await.unwrap();
    let database_url = format!("postgres://postgres:postgres@{host}:{port}/postgres");

    let pool = kido_web::db::create_pool(&database_url, 2).await.unwrap();
    kido_web::db::run_migrations(&pool).await.unwrap();
    let store = PgStore::new(pool);

    assert_eq!(store.get("games").await.unwrap(), None);
    store.put("games", "{}").await.unwrap();
    store.put("games", "{\"x\":1}").await.unwrap();
    assert_eq!(
        store.get("games").await.unwrap().as_deref(),
        Some("{\"x\":1}")
    );

    let first = TestServer::start_with(store.clone()).await;
    let (black, _) = first.create_and_join().await;
    first.play_ok(&black, 9, 9).await;

    let second = TestServer::start_with(store).await;
    let game = second.game(&black.game_id).await;
    assert_eq!(game["turn"], 2);
    assert_eq!(game["board"][9][9], "black");
}
