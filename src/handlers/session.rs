//! Session credential issuance handler.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::errors::{RelayError, RelayResult};
use crate::provider::ProviderError;
use crate::state::AppState;

/// Response body for POST /api/ephemeral-key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EphemeralKeyResponse {
    /// Short-lived credential authorizing a realtime session.
    pub token: String,
    /// WebRTC negotiation endpoint the client should use with the token.
    pub endpoint: String,
}

/// Handler for POST /api/ephemeral-key - mint a realtime session credential.
///
/// No request body is required. The deployment, voice, and noise reduction
/// parameters come from the server configuration, never from the caller.
/// Provider rejections are logged in full and surfaced as a generic 500.
pub async fn mint_ephemeral_key(
    State(state): State<Arc<AppState>>,
) -> RelayResult<Json<EphemeralKeyResponse>> {
    match state.provider.mint_session().await {
        Ok(session) => {
            info!(
                expires_at = ?session.client_secret.expires_at,
                "issued realtime session credential"
            );
            Ok(Json(EphemeralKeyResponse {
                token: session.client_secret.value,
                endpoint: state.config.webrtc_endpoint.clone(),
            }))
        }
        Err(ProviderError::Upstream { status, body }) => {
            error!(%status, %body, "realtime session request rejected");
            Err(RelayError::upstream(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to contact the Realtime API",
            ))
        }
        Err(err) => Err(RelayError::Transport(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_serialization() {
        let response = EphemeralKeyResponse {
            token: "abc123".to_string(),
            endpoint: "https://region.example.com/v1/realtimertc".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"token\":\"abc123\""));
        assert!(json.contains("\"endpoint\":\"https://region.example.com/v1/realtimertc\""));
    }
}
