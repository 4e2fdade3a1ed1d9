//! API route configuration.

use std::sync::Arc;

use axum::{Router, routing::post};
use tower_http::trace::TraceLayer;

use crate::handlers::{chat, session, webrtc};
use crate::state::AppState;

/// Create the API router with the three relay endpoints.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/ephemeral-key", post(session::mint_ephemeral_key))
        .route("/api/webrtc-session", post(webrtc::create_webrtc_session))
        .route("/api/send-question", post(chat::send_question))
        .layer(TraceLayer::new_for_http())
}
