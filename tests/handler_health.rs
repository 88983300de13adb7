mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use link_shortener::api::handlers::health_handler;
use link_shortener::application::services::ClickRecording;
use link_shortener::domain::entities::{Click, Link, NewLink};
use link_shortener::domain::repositories::LinkRepository;
use link_shortener::error::AppError;
use std::sync::Arc;

/// A store whose every call fails as if the database were down.
struct UnreachableRepository;

#[async_trait]
impl LinkRepository for UnreachableRepository {
    async fn find_by_code(&self, _code: &str) -> Result<Option<Link>, AppError> {
        Err(AppError::store_unavailable("pool timed out"))
    }

    async fn insert(&self, _new_link: NewLink) -> Result<Link, AppError> {
        Err(AppError::store_unavailable("pool timed out"))
    }

    async fn append_click(&self, _link_id: i64, _click: Click) -> Result<(), AppError> {
        Err(AppError::store_unavailable("pool timed out"))
    }

    async fn list_clicks(&self, _link_id: i64) -> Result<Vec<Click>, AppError> {
        Err(AppError::store_unavailable("pool timed out"))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let (state, _repo) = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "OK");
    assert_eq!(json["database"], "connected");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["timestamp"].is_string());
    assert!(json["uptime"].is_u64());
}

#[tokio::test]
async fn test_health_endpoint_store_down() {
    let (state, _repo) =
        common::create_test_state_with(Arc::new(UnreachableRepository), ClickRecording::Inline);
    let server = common::create_test_server(state);

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "ERROR");
    assert_eq!(json["database"], "disconnected");
}

#[tokio::test]
async fn test_store_failure_is_reported_as_server_error() {
    let (state, _repo) =
        common::create_test_state_with(Arc::new(UnreachableRepository), ClickRecording::Inline);
    let server = common::create_test_server(state);

    let create = server
        .post("/")
        .json(&serde_json::json!({ "long_url": "https://example.com" }))
        .await;
    create.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = create.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Server error");

    // a timeout must never look like "not found"
    server
        .get("/aB3x")
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}
