use reqwest::StatusCode;
use serde_json::json;

use crate::common::TestServer;

/// Black (3,3) accepted, white (3,3) occupied, white (3,4) accepted.
#[tokio::test]
async fn occupied_then_adjacent() {
    let server = TestServer::start().await;
    let (black, white) = server.create_and_join().await;

    let game = server.play_ok(&black, 3, 3).await;
    assert_eq!(game["turn"], 2);
    assert_eq!(game["board"][3][3], "black");
    assert_eq!(game["currentPlayer"], "white");
    assert_eq!(game["lastMove"], json!({"row": 3, "col": 3}));

    let (status, body) = server.play(&white, 3, 3).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "occupied");
    assert_eq!(body["error"], "Intersection is already occupied.");
    assert_eq!(server.game(&black.game_id).await["turn"], 2);

    let game = server.play_ok(&white, 3, 4).await;
    assert_eq!(game["turn"], 3);
    assert_eq!(game["board"][3][4], "white");
    assert_eq!(game["history"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn move_before_join_is_not_active() {
    let server = TestServer::start().await;
    let black = server.create_game("alice").await;
    let (status, body) = server.play(&black, 3, 3).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "not_active");
    assert_eq!(body["error"], "Game is not active.");
}

#[tokio::test]
async fn out_of_turn() {
    let server = TestServer::start().await;
    let (_, white) = server.create_and_join().await;
    let (status, body) = server.play(&white, 3, 3).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "not_your_turn");
}

#[tokio::test]
async fn out_of_bounds() {
    let server = TestServer::start().await;
    let (black, _) = server.create_and_join().await;
    for (row, col) in [(-1, 0), (0, -1), (19, 0), (0, 19)] {
        let (status, body) = server.play(&black, row, col).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "out_of_bounds");
    }
}

#[tokio::test]
async fn wrong_session_is_unauthorized() {
    let server = TestServer::start().await;
    let (black, white) = server.create_and_join().await;
    let (status, body) = server
        .post(
            &format!("/api/games/{}/move", black.game_id),
            json!({
                "playerId": black.player_id,
                "sessionId": white.session_id,
                "row": 3,
                "col": 3,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "unauthorized");

    let game = server.game(&black.game_id).await;
    assert_eq!(game["turn"], 1);
    assert!(game["board"][3][3].is_null());
}

#[tokio::test]
async fn missing_parameters_are_rejected() {
    let server = TestServer::start().await;
    let (black, _) = server.create_and_join().await;
    let (status, body) = server
        .post(
            &format!("/api/games/{}/move", black.game_id),
            json!({ "playerId": black.player_id, "row": 3, "col": 3 }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required move parameters");
}

#[tokio::test]
async fn turns_alternate() {
    let server = TestServer::start().await;
    let (black, white) = server.create_and_join().await;

    let moves = [(0, 0), (18, 18), (0, 18), (18, 0), (9, 9)];
    for (n, &(row, col)) in moves.iter().enumerate() {
        let seat = if n % 2 == 0 { &black } else { &white };
        let game = server.play_ok(seat, row, col).await;
        let expected = if (n + 1) % 2 == 0 { "black" } else { "white" };
        assert_eq!(game["currentPlayer"], expected);
        assert_eq!(game["turn"], n as u64 + 2);
    }
}

#[tokio::test]
async fn suicide_is_rejected() {
    let server = TestServer::start().await;
    let (black, white) = server.create_and_join().await;
    server.play_ok(&black, 0, 1).await;
    server.play_ok(&white, 9, 9).await;
    server.play_ok(&black, 1, 0).await;

    let (status, body) = server.play(&white, 0, 0).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "suicide");

    let game = server.game(&black.game_id).await;
    assert!(game["board"][0][0].is_null());
    assert_eq!(game["turn"], 4);
}
