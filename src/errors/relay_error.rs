//! Boundary error type mapping handler failures to HTTP responses.
//!
//! Every handler either fully succeeds or returns one of three failure
//! classes: invalid caller input, an upstream rejection, or a transport
//! failure. Transport details are logged but never sent to the caller.

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON error body returned on every failure path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Relay-level request failure.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The caller's request is missing or has empty required fields.
    #[error("{0}")]
    Client(String),

    /// The provider rejected the outbound call. `status` is what the caller
    /// sees; the provider's own status/body are logged at the call site.
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },

    /// The outbound call failed or returned an uninterpretable body. The
    /// detail is logged here; the caller only sees a generic message.
    #[error("upstream request failed")]
    Transport(String),
}

impl RelayError {
    pub fn client(message: impl Into<String>) -> Self {
        Self::Client(message.into())
    }

    pub fn upstream(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }
}

/// Convenience alias for handler return types.
pub type RelayResult<T> = Result<T, RelayError>;

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            RelayError::Client(message) => (StatusCode::BAD_REQUEST, message),
            RelayError::Upstream { status, message } => (status, message),
            RelayError::Transport(detail) => {
                tracing::error!(error = %detail, "outbound request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "upstream request failed".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_maps_to_400() {
        let response = RelayError::client("Missing question text").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upstream_error_forwards_status() {
        let response =
            RelayError::upstream(StatusCode::UNAUTHORIZED, "Failed to create WebRTC session")
                .into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_transport_error_is_generic_500() {
        let response = RelayError::Transport("connection refused".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_transport_error_body_hides_detail() {
        let response = RelayError::Transport("secret internal detail".to_string()).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "upstream request failed");
    }
}
