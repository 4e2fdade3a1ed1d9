//! Wire types for the Azure OpenAI endpoints the relay talks to.
//!
//! Request bodies are serialized exactly as the provider expects them;
//! response types only deserialize the fields the relay actually forwards.

use serde::{Deserialize, Serialize};

// =============================================================================
// Realtime session creation
// =============================================================================

/// Request body for minting a realtime session credential.
#[derive(Debug, Clone, Serialize)]
pub struct SessionRequest {
    /// Realtime deployment name.
    pub model: String,
    /// Voice used for audio responses.
    pub voice: String,
    /// Input audio noise reduction configuration.
    pub input_audio_noise_reduction: NoiseReduction,
}

/// Noise reduction settings sent with a session request.
#[derive(Debug, Clone, Serialize)]
pub struct NoiseReduction {
    #[serde(rename = "type")]
    pub mode: String,
}

/// Provider response to a session creation request.
///
/// The response carries more fields than this; the relay only needs the
/// ephemeral client secret.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionResponse {
    pub client_secret: ClientSecret,
}

/// Short-lived session credential issued by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSecret {
    /// Opaque bearer token authorizing a realtime session.
    pub value: String,
    /// Unix timestamp when the credential expires.
    #[serde(default)]
    pub expires_at: Option<i64>,
}

// =============================================================================
// Chat completion
// =============================================================================

/// Request body for a chat completion call.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// A single conversation turn.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Provider response to a chat completion call.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
    pub usage: TokenUsage,
}

/// One generated completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: AssistantMessage,
}

/// The assistant turn inside a completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Token usage counters, forwarded to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_session_request_serialization() {
        let request = SessionRequest {
            model: "gpt-4o-realtime-preview".to_string(),
            voice: "alloy".to_string(),
            input_audio_noise_reduction: NoiseReduction {
                mode: "near_field".to_string(),
            },
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4o-realtime-preview");
        assert_eq!(value["voice"], "alloy");
        assert_eq!(value["input_audio_noise_reduction"]["type"], "near_field");
    }

    #[test]
    fn test_session_response_deserialization() {
        let body = json!({
            "id": "sess_001",
            "client_secret": {
                "value": "abc123",
                "expires_at": 1735689600
            }
        });

        let response: SessionResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.client_secret.value, "abc123");
        assert_eq!(response.client_secret.expires_at, Some(1735689600));
    }

    #[test]
    fn test_session_response_without_expiry() {
        let body = json!({ "client_secret": { "value": "tok" } });
        let response: SessionResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.client_secret.value, "tok");
        assert_eq!(response.client_secret.expires_at, None);
    }

    #[test]
    fn test_chat_message_roles() {
        let system = ChatMessage::system("instructions");
        assert_eq!(system.role, "system");
        let user = ChatMessage::user("Hello");
        assert_eq!(user.role, "user");
        assert_eq!(user.content, "Hello");
    }

    #[test]
    fn test_chat_completion_response_deserialization() {
        let body = json!({
            "choices": [
                { "message": { "role": "assistant", "content": "Olá" } }
            ],
            "usage": {
                "prompt_tokens": 10,
                "completion_tokens": 2,
                "total_tokens": 12
            }
        });

        let response: ChatCompletionResponse = serde_json::from_value(body).unwrap();
        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some("Olá")
        );
        assert_eq!(response.usage.prompt_tokens, 10);
        assert_eq!(response.usage.completion_tokens, 2);
        assert_eq!(response.usage.total_tokens, 12);
    }

    #[test]
    fn test_chat_completion_response_null_content() {
        let body = json!({
            "choices": [ { "message": { "role": "assistant", "content": null } } ],
            "usage": { "prompt_tokens": 1, "completion_tokens": 0, "total_tokens": 1 }
        });

        let response: ChatCompletionResponse = serde_json::from_value(body).unwrap();
        assert!(response.choices[0].message.content.is_none());
    }

    #[test]
    fn test_token_usage_round_trip() {
        let usage = TokenUsage {
            prompt_tokens: 10,
            completion_tokens: 2,
            total_tokens: 12,
        };
        let json = serde_json::to_string(&usage).unwrap();
        assert!(json.contains("\"prompt_tokens\":10"));
        let back: TokenUsage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, usage);
    }
}
