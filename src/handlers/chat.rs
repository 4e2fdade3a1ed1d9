//! Completion proxy handler.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::errors::{RelayError, RelayResult};
use crate::provider::ProviderError;
use crate::provider::messages::TokenUsage;
use crate::state::AppState;

/// Request body for POST /api/send-question.
#[derive(Debug, Clone, Deserialize)]
pub struct SendQuestionRequest {
    /// Free text to translate.
    #[serde(default)]
    pub text: Option<String>,
}

/// Response body for POST /api/send-question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendQuestionResponse {
    /// Generated translation.
    pub answer: String,
    /// Provider token usage counters, forwarded as-is.
    pub usage: TokenUsage,
}

/// Handler for POST /api/send-question - translate caller text via a single
/// chat completion call.
///
/// The conversation shape is fixed (system instruction + one user turn);
/// repeating a request issues a fresh outbound call each time.
pub async fn send_question(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SendQuestionRequest>,
) -> RelayResult<Json<SendQuestionResponse>> {
    // Emptiness is checked on a trimmed view; the text itself goes to the
    // provider as received.
    let text = request.text.as_deref().filter(|t| !t.trim().is_empty());

    let Some(text) = text else {
        return Err(RelayError::client("Missing question text"));
    };

    match state.provider.chat_completion(text).await {
        Ok(chat) => {
            info!(
                prompt_tokens = chat.usage.prompt_tokens,
                completion_tokens = chat.usage.completion_tokens,
                "chat completion succeeded"
            );
            Ok(Json(SendQuestionResponse {
                answer: chat.answer,
                usage: chat.usage,
            }))
        }
        Err(ProviderError::Upstream { status, body }) => {
            error!(%status, %body, "chat completion rejected");
            Err(RelayError::upstream(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to contact the chat completion API",
            ))
        }
        Err(err) => Err(RelayError::Transport(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_without_text_deserializes() {
        let request: SendQuestionRequest = serde_json::from_str("{}").unwrap();
        assert!(request.text.is_none());
    }

    #[test]
    fn test_response_serialization() {
        let response = SendQuestionResponse {
            answer: "Olá".to_string(),
            usage: TokenUsage {
                prompt_tokens: 10,
                completion_tokens: 2,
                total_tokens: 12,
            },
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["answer"], "Olá");
        assert_eq!(value["usage"]["prompt_tokens"], 10);
        assert_eq!(value["usage"]["completion_tokens"], 2);
        assert_eq!(value["usage"]["total_tokens"], 12);
    }
}
