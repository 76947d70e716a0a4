#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use playlog_api::config::{CompletionConfig, RawgConfig, ServerConfig};
use playlog_api::router::build_app_router;
use playlog_api::state::AppState;
use playlog_upstream::completion::CompletionClient;
use playlog_upstream::rawg::RawgClient;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

pub const RAWG_KEY: &str = "rawg-test-key";
pub const COMPLETION_KEY: &str = "completion-test-key";

/// Nothing listens on port 9 locally; tests that never reach an upstream use this.
pub const UNREACHABLE: &str = "http://127.0.0.1:9";

/// Build a test `ServerConfig` pointing the upstream clients at the given URLs.
pub fn test_config(rawg_url: &str, completion_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        upstream_timeout_secs: 5,
        rawg: RawgConfig {
            api_url: rawg_url.to_string(),
            api_key: RAWG_KEY.to_string(),
        },
        completion: CompletionConfig {
            api_url: completion_url.to_string(),
            api_key: COMPLETION_KEY.to_string(),
            model: "gpt-4o-mini".to_string(),
        },
    }
}

/// Build the full application router, middleware included, on `pool`.
pub fn build_test_app_with(pool: PgPool, rawg_url: &str, completion_url: &str) -> Router {
    let config = test_config(rawg_url, completion_url);
    let timeout = Duration::from_secs(config.upstream_timeout_secs);

    let catalog = RawgClient::new(
        config.rawg.api_url.clone(),
        config.rawg.api_key.clone(),
        timeout,
    )
    .unwrap();
    let completion = CompletionClient::new(
        config.completion.api_url.clone(),
        config.completion.api_key.clone(),
        config.completion.model.clone(),
        timeout,
    )
    .unwrap();

    let config = Arc::new(config);
    let state = AppState {
        pool,
        config: Arc::clone(&config),
        catalog: Arc::new(catalog),
        completion: Arc::new(completion),
    };
    build_app_router(state, &config)
}

/// Router whose upstream clients point nowhere.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, UNREACHABLE, UNREACHABLE)
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send_json(app, "POST", uri, body).await
}

pub async fn delete_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send_json(app, "DELETE", uri, body).await
}

pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    app.oneshot(
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn send_json(app: Router, method: &str, uri: &str, body: Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Create a game through the API and return its id.
pub async fn create_game(pool: &PgPool, name: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/api/games", serde_json::json!({ "name": name })).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}
