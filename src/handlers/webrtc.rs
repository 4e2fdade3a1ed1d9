//! WebRTC session negotiation proxy handler.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use http::header::CONTENT_TYPE;
use serde::Deserialize;
use tracing::{debug, error};

use crate::errors::{RelayError, RelayResult};
use crate::provider::ProviderError;
use crate::state::AppState;

/// Request body for POST /api/webrtc-session.
///
/// Both fields are required; they are declared optional so that missing
/// fields produce the relay's 400 response instead of a deserialization
/// rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct WebRtcSessionRequest {
    /// SDP offer, forwarded verbatim.
    #[serde(default)]
    pub sdp: Option<String>,
    /// Ephemeral session credential from POST /api/ephemeral-key.
    #[serde(default)]
    pub token: Option<String>,
}

/// Handler for POST /api/webrtc-session - proxy an SDP offer to the provider.
///
/// On success the provider's answer is returned verbatim as
/// `application/sdp` with the provider's HTTP status forwarded. On a
/// provider rejection the original status is forwarded with a generic error
/// body; the provider's detail is only logged.
pub async fn create_webrtc_session(
    State(state): State<Arc<AppState>>,
    Json(request): Json<WebRtcSessionRequest>,
) -> RelayResult<Response> {
    // The offer is an opaque blob; emptiness is checked on a trimmed view
    // but the bytes forwarded are the caller's, CRLF line endings included.
    let sdp_offer = request.sdp.as_deref().filter(|s| !s.trim().is_empty());
    let token = request
        .token
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());

    let (Some(sdp_offer), Some(token)) = (sdp_offer, token) else {
        return Err(RelayError::client("Missing SDP offer or ephemeral key"));
    };

    debug!(offer_len = sdp_offer.len(), "received SDP offer");

    match state.provider.negotiate_session(sdp_offer, token).await {
        Ok(answer) => Ok((
            answer.status,
            [(CONTENT_TYPE, "application/sdp")],
            answer.sdp,
        )
            .into_response()),
        Err(ProviderError::Upstream { status, body }) => {
            error!(%status, %body, "WebRTC session negotiation rejected");
            Err(RelayError::upstream(
                status,
                "Failed to create WebRTC session",
            ))
        }
        Err(err) => Err(RelayError::Transport(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_with_missing_fields_deserializes() {
        let request: WebRtcSessionRequest = serde_json::from_str("{}").unwrap();
        assert!(request.sdp.is_none());
        assert!(request.token.is_none());
    }

    #[test]
    fn test_request_full_deserialization() {
        let request: WebRtcSessionRequest =
            serde_json::from_str(r#"{"sdp": "v=0...", "token": "tok"}"#).unwrap();
        assert_eq!(request.sdp.as_deref(), Some("v=0..."));
        assert_eq!(request.token.as_deref(), Some("tok"));
    }
}
