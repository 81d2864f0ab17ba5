mod common;

use alias_shortener::routes;
use alias_shortener::state::AppState;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_test::TestServer;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_ok() {
    let (server, _repo) = common::create_test_server(&common::test_config());

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "ok");
}

#[tokio::test]
async fn test_health_degraded_when_store_unavailable() {
    let config = common::test_config();
    let state = AppState::new(Arc::new(common::UnavailableRepository), &config);
    let server = TestServer::new(routes::router(state, Duration::from_secs(10))).unwrap();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);
    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["database"]["status"], "error");
}

#[tokio::test]
async fn test_storage_failure_is_generic_500() {
    let config = common::test_config();
    let state = AppState::new(Arc::new(common::UnavailableRepository), &config);
    let server = TestServer::new(routes::router(state, Duration::from_secs(10))).unwrap();

    let response = server
        .post("/url")
        .json(&serde_json::json!({"url": "https://example.com/page"}))
        .await;

    assert_eq!(response.status_code(), 500);
    let body: Value = response.json();
    assert_eq!(body["error"], "internal server error");
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let config = common::test_config();
    let (state, _repo) = common::create_test_state(&config);
    let app = routes::app_router(state, Duration::from_secs(10));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
