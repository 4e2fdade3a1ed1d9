//! Server Assembly Tests
//!
//! Verifies that the router assembles from a valid configuration and that
//! the non-proxy surfaces (health check, static entry page) respond.

use std::io::Write;
use std::path::PathBuf;

use axum::{Router, body::Body, http::Request, routing::get};
use http::StatusCode;
use serde_json::Value;
use tempfile::Builder;
use tower::util::ServiceExt;

use voz_relay::provider::config::{NoiseReductionMode, RealtimeVoice};
use voz_relay::{RelayConfig, handlers, routes, state::AppState};

fn minimal_config() -> RelayConfig {
    RelayConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        tls: None,
        api_key: "test-api-key".to_string(),
        chat_endpoint: "https://example.openai.azure.com".to_string(),
        chat_deployment: "gpt-test".to_string(),
        realtime_endpoint: None,
        realtime_deployment: "gpt-rt-test".to_string(),
        webrtc_endpoint: "https://example.openai.azure.com/v1/realtimertc".to_string(),
        realtime_voice: RealtimeVoice::Alloy,
        noise_reduction: NoiseReductionMode::NearField,
        cors_allowed_origins: None,
        upstream_timeout_seconds: 5,
        static_index: PathBuf::from("static/index.html"),
    }
}

#[tokio::test]
async fn test_app_state_builds_from_valid_config() {
    let state = AppState::new(minimal_config());
    assert!(state.is_ok());
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let state = AppState::new(minimal_config()).expect("failed to build app state");
    let app = Router::new()
        .route("/healthz", get(handlers::health_check))
        .with_state(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "OK");
    assert_eq!(body["service"], "voz-relay");
}

#[tokio::test]
async fn test_static_index_is_served_at_root() {
    let mut index = Builder::new()
        .suffix(".html")
        .tempfile()
        .expect("failed to create temp index");
    write!(index, "<!DOCTYPE html><html><body>relay</body></html>")
        .expect("failed to write temp index");

    let state = AppState::new(minimal_config()).expect("failed to build app state");
    let app = routes::assets::create_asset_router(index.path()).with_state(state);

    // Plain request and one carrying query parameters, which the original
    // page uses for session bookkeeping.
    for uri in ["/", "/?session=1"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"));
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("relay"));
    }
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let state = AppState::new(minimal_config()).expect("failed to build app state");
    let app = routes::api::create_api_router().with_state(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/does-not-exist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
