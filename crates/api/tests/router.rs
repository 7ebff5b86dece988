//! Smoke tests for the application router.
//!
//! These run without a database: the pool is constructed lazily and the
//! assertions only cover behaviour that must hold when the database is
//! unreachable.

use std::sync::Arc;

use artproof_api::config::ServerConfig;
use artproof_api::router::build_app_router;
use artproof_api::state::AppState;
use artproof_events::EventBus;
use artproof_photoshop::PhotoshopApi;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".into(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".into()],
        request_timeout_secs: 5,
    }
}

fn test_state() -> AppState {
    // A lazy pool does not connect until a query runs; port 1 is never a
    // Postgres server, so queries fail fast.
    let pool = PgPool::connect_lazy("postgres://127.0.0.1:1/artproof_test")
        .expect("lazy pool construction needs no server");

    AppState {
        pool,
        config: Arc::new(test_config()),
        photoshop: Arc::new(PhotoshopApi::new("http://127.0.0.1:9".into(), String::new())),
        event_bus: Arc::new(EventBus::default()),
    }
}

#[tokio::test]
async fn health_endpoint_reports_degraded_without_database() {
    let app = build_app_router(test_state(), &test_config());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = build_app_router(test_state(), &test_config());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
