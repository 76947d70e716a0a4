//! HTTP-level tests for `/api/games/notes`.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_game, delete_json, get, post_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_and_list_notes(pool: PgPool) {
    let game_id = create_game(&pool, "Hollow Knight").await;

    for title in ["Map", "Charms"] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            "/api/games/notes",
            json!({"gameId": game_id, "title": title, "content": "..."}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/games/notes?gameId={game_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let notes = json.as_array().unwrap();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0]["title"], "Charms");
    assert_eq!(notes[0]["gameId"], game_id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_note_requires_title_and_content(pool: PgPool) {
    let game_id = create_game(&pool, "Hollow Knight").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/games/notes",
        json!({"gameId": game_id, "title": "", "content": "x"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/games/notes",
        json!({"gameId": game_id, "title": "x"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_note_for_missing_game_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/games/notes",
        json!({"gameId": 777, "title": "t", "content": "c"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Game with id 777 not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_note_then_again_is_404(pool: PgPool) {
    let game_id = create_game(&pool, "Hollow Knight").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/games/notes",
            json!({"gameId": game_id, "title": "t", "content": "c"}),
        )
        .await,
    )
    .await;
    let note_id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete_json(app, "/api/games/notes", json!({"noteId": note_id})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);

    let app = common::build_test_app(pool);
    let response = delete_json(app, "/api/games/notes", json!({"noteId": note_id})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_notes_requires_game_id(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/games/notes").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/games/notes?gameId=abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
