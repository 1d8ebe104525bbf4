//! Tests for the HTTP client against a stub game server.

use axum::{
    Json, Router,
    routing::{get, post},
};
use serde_json::{Value, json};
use tictactoe_tui::{Authority, Cell, MoveIntent, Player, RemoteClient};

/// Binds an ephemeral port, serves `router` in the background, and returns
/// the base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn in_progress_envelope() -> Value {
    json!({
        "success": true,
        "state": {
            "board": [["X", "", ""], ["", "O", ""], ["", "", ""]],
            "current_player": "X",
            "game_over": false,
            "winner": null,
            "moves": 2
        }
    })
}

#[tokio::test]
async fn test_fetch_state_parses_server_contract() {
    let router = Router::new().route("/api/state", get(|| async { Json(in_progress_envelope()) }));
    let client = RemoteClient::new(serve(router).await);

    let state = client.fetch_state().await.unwrap();

    assert_eq!(state.cell(0, 0), Cell::Mark(Player::X));
    assert_eq!(state.cell(1, 1), Cell::Mark(Player::O));
    assert_eq!(state.cell(2, 2), Cell::Empty);
    assert_eq!(state.current_player, Player::X);
    assert!(!state.game_over);
    assert_eq!(state.winner, None);
    assert_eq!(state.moves, 2);
}

#[tokio::test]
async fn test_move_posts_row_and_col() {
    let router = Router::new().route(
        "/api/move",
        post(|Json(intent): Json<MoveIntent>| async move {
            // Echo the requested square back as an X so the test can see
            // exactly what the client sent.
            let mut board = vec![vec![String::new(); 3]; 3];
            board[intent.row][intent.col] = "X".to_string();
            Json(json!({
                "success": true,
                "state": {
                    "board": board,
                    "current_player": "O",
                    "game_over": false,
                    "winner": null,
                    "moves": 1
                }
            }))
        }),
    );
    let client = RemoteClient::new(serve(router).await);

    let state = client.submit_move(2, 1).await.unwrap();

    assert_eq!(state.cell(2, 1), Cell::Mark(Player::X));
    assert_eq!(state.cell(0, 0), Cell::Empty);
    assert_eq!(state.current_player, Player::O);
}

#[tokio::test]
async fn test_rejected_move_is_an_error() {
    let router = Router::new().route(
        "/api/move",
        post(|| async { Json(json!({"success": false, "message": "Invalid move"})) }),
    );
    let client = RemoteClient::new(serve(router).await);

    let err = client.submit_move(0, 0).await.unwrap_err();

    assert!(err.to_string().contains("Invalid move"));
}

#[tokio::test]
async fn test_reset_returns_fresh_state() {
    let router = Router::new().route(
        "/api/reset",
        post(|| async {
            Json(json!({
                "success": true,
                "state": {
                    "board": [["", "", ""], ["", "", ""], ["", "", ""]],
                    "current_player": "X",
                    "game_over": false,
                    "winner": null,
                    "moves": 0
                }
            }))
        }),
    );
    let client = RemoteClient::new(serve(router).await);

    let state = client.submit_reset().await.unwrap();

    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(state.cell(row, col), Cell::Empty);
        }
    }
    assert_eq!(state.current_player, Player::X);
    assert_eq!(state.moves, 0);
}

#[tokio::test]
async fn test_malformed_body_is_an_error() {
    let router = Router::new().route("/api/state", get(|| async { "not json" }));
    let client = RemoteClient::new(serve(router).await);

    assert!(client.fetch_state().await.is_err());
}
