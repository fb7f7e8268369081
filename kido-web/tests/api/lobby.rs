use reqwest::StatusCode;
use serde_json::json;

use crate::common::TestServer;

#[tokio::test]
async fn health_check() {
    let server = TestServer::start().await;
    let resp = server.client.get(server.url("/up")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn create_returns_waiting_game_and_credentials() {
    let server = TestServer::start().await;
    let (status, body) = server.post("/api/games", json!({"playerName": "alice"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let game = &body["data"]["game"];
    assert_eq!(game["gameStatus"], "waiting");
    assert_eq!(game["currentPlayer"], "black");
    assert_eq!(game["turn"], 1);
    assert_eq!(game["board"].as_array().unwrap().len(), 19);
    assert!(game["players"][0].get("sessionId").is_none());

    let player = &body["data"]["player"];
    assert_eq!(player["color"], "black");
    assert_eq!(player["name"], "alice");
    assert!(player["sessionId"].as_str().is_some());
}

#[tokio::test]
async fn create_requires_name() {
    let server = TestServer::start().await;
    let (status, body) = server.post("/api/games", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Player name is required");

    let (status, _) = server.post("/api/games", json!({"playerName": "   "})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn join_starts_game() {
    let server = TestServer::start().await;
    let black = server.create_game("alice").await;
    let (status, body) = server
        .post(
            &format!("/api/games/{}/join", black.game_id),
            json!({"playerName": "bob"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["player"]["color"], "white");
    assert_eq!(body["data"]["game"]["gameStatus"], "playing");
    assert_eq!(body["data"]["game"]["players"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn join_full_game_conflicts() {
    let server = TestServer::start().await;
    let (black, _) = server.create_and_join().await;
    let (status, body) = server
        .post(
            &format!("/api/games/{}/join", black.game_id),
            json!({"playerName": "carol"}),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "conflict");
}

#[tokio::test]
async fn unknown_game_is_not_found() {
    let server = TestServer::start().await;
    let (status, body) = server.get("/api/games/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);

    let (status, _) = server
        .post("/api/games/nope/join", json!({"playerName": "bob"}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_shows_every_game() {
    let server = TestServer::start().await;
    let (full, _) = server.create_and_join().await;
    let open = server.create_game("carol").await;

    let (status, body) = server.get("/api/games").await;
    assert_eq!(status, StatusCode::OK);
    let games = body["data"].as_array().unwrap();
    assert_eq!(games.len(), 2);

    let full_row = games.iter().find(|g| g["gameId"] == full.game_id.as_str()).unwrap();
    assert_eq!(full_row["player1Name"], "alice");
    assert_eq!(full_row["player2Name"], "bob");
    assert_eq!(full_row["gameStatus"], "playing");

    let open_row = games.iter().find(|g| g["gameId"] == open.game_id.as_str()).unwrap();
    assert_eq!(open_row["player1Name"], "carol");
    assert!(open_row.get("player2Name").is_none());
    assert_eq!(open_row["turn"], 1);
}

#[tokio::test]
async fn fetched_game_hides_credentials() {
    let server = TestServer::start().await;
    let (black, _) = server.create_and_join().await;
    let game = server.game(&black.game_id).await;
    for player in game["players"].as_array().unwrap() {
        assert!(player.get("sessionId").is_none());
    }
}
