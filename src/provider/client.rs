//! Azure OpenAI provider client.
//!
//! One client instance is built at startup and shared read-only by all
//! request handlers. Each operation performs exactly one outbound HTTP call
//! with no retries; the explicit timeout comes from the relay configuration.

use std::time::Duration;

use http::StatusCode;
use thiserror::Error;
use tracing::debug;

use super::config::{
    CHAT_API_VERSION, NoiseReductionMode, REALTIME_SESSIONS_API_VERSION, REALTIME_SESSIONS_PATH,
    RealtimeVoice,
};
use super::messages::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, NoiseReduction, SessionRequest,
    SessionResponse, TokenUsage,
};
use crate::config::RelayConfig;

/// Fixed system instruction for the completion endpoint.
const TRANSLATOR_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that translates text from English to Brazilian Portuguese.";

/// Maximum output length for chat completions.
const CHAT_MAX_TOKENS: u32 = 1000;

/// Sampling temperature for chat completions.
const CHAT_TEMPERATURE: f32 = 0.3;

/// Errors produced by outbound provider calls.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider answered with a non-success status.
    #[error("provider returned status {status}")]
    Upstream { status: StatusCode, body: String },

    /// The outbound call failed below the HTTP layer (DNS, connect, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a body the relay cannot interpret.
    #[error("malformed provider response: {0}")]
    Malformed(String),
}

/// SDP answer returned by the provider's negotiation endpoint.
///
/// The body is treated as an opaque blob and forwarded verbatim, along with
/// the provider's HTTP status.
#[derive(Debug, Clone)]
pub struct SdpAnswer {
    pub status: StatusCode,
    pub sdp: String,
}

/// Result of a chat completion call: the generated text plus usage counters.
#[derive(Debug, Clone)]
pub struct ChatAnswer {
    pub answer: String,
    pub usage: TokenUsage,
}

/// Client for the Azure OpenAI endpoints the relay proxies.
#[derive(Clone)]
pub struct AzureOpenAiClient {
    http: reqwest::Client,
    api_key: String,
    /// Base URL for realtime session minting (trailing slash stripped).
    session_base: String,
    /// Base URL of the chat resource (trailing slash stripped).
    chat_endpoint: String,
    chat_deployment: String,
    realtime_deployment: String,
    /// Public WebRTC negotiation endpoint.
    webrtc_endpoint: String,
    voice: RealtimeVoice,
    noise_reduction: NoiseReductionMode,
}

/// Manual impl so the API key never reaches debug output.
impl std::fmt::Debug for AzureOpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureOpenAiClient")
            .field("api_key", &"[REDACTED]")
            .field("session_base", &self.session_base)
            .field("chat_endpoint", &self.chat_endpoint)
            .field("chat_deployment", &self.chat_deployment)
            .field("realtime_deployment", &self.realtime_deployment)
            .field("webrtc_endpoint", &self.webrtc_endpoint)
            .field("voice", &self.voice)
            .field("noise_reduction", &self.noise_reduction)
            .finish()
    }
}

impl AzureOpenAiClient {
    /// Build the client from the relay configuration.
    pub fn new(config: &RelayConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            session_base: config
                .realtime_session_base()
                .trim_end_matches('/')
                .to_string(),
            chat_endpoint: config.chat_endpoint.trim_end_matches('/').to_string(),
            chat_deployment: config.chat_deployment.clone(),
            realtime_deployment: config.realtime_deployment.clone(),
            webrtc_endpoint: config.webrtc_endpoint.clone(),
            voice: config.realtime_voice,
            noise_reduction: config.noise_reduction,
        })
    }

    /// Mint a short-lived realtime session credential.
    ///
    /// The provider must answer 200; anything else is surfaced as
    /// [`ProviderError::Upstream`] so the handler can log it without leaking
    /// the detail to the caller.
    pub async fn mint_session(&self) -> Result<SessionResponse, ProviderError> {
        let url = format!(
            "{}{}?api-version={}",
            self.session_base, REALTIME_SESSIONS_PATH, REALTIME_SESSIONS_API_VERSION
        );

        let request = SessionRequest {
            model: self.realtime_deployment.clone(),
            voice: self.voice.as_str().to_string(),
            input_audio_noise_reduction: NoiseReduction {
                mode: self.noise_reduction.as_str().to_string(),
            },
        };

        debug!(model = %self.realtime_deployment, voice = %self.voice, "minting realtime session");

        let response = self
            .http
            .post(&url)
            .header("api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Upstream { status, body });
        }

        response
            .json::<SessionResponse>()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))
    }

    /// Forward an SDP offer to the provider's WebRTC negotiation endpoint.
    ///
    /// The offer and answer are opaque blobs; the relay authenticates with the
    /// caller-supplied ephemeral token, not the server API key.
    pub async fn negotiate_session(
        &self,
        sdp_offer: &str,
        ephemeral_token: &str,
    ) -> Result<SdpAnswer, ProviderError> {
        debug!(offer_len = sdp_offer.len(), "forwarding SDP offer");

        let response = self
            .http
            .post(&self.webrtc_endpoint)
            .header(http::header::AUTHORIZATION, format!("Bearer {ephemeral_token}"))
            .header(http::header::CONTENT_TYPE, "application/sdp")
            .body(sdp_offer.to_string())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(ProviderError::Upstream { status, body });
        }

        Ok(SdpAnswer { status, sdp: body })
    }

    /// Issue a chat completion wrapping the caller text in the fixed
    /// translator conversation.
    pub async fn chat_completion(&self, text: &str) -> Result<ChatAnswer, ProviderError> {
        let url = format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.chat_endpoint, self.chat_deployment, CHAT_API_VERSION
        );

        let request = ChatCompletionRequest {
            messages: vec![
                ChatMessage::system(TRANSLATOR_SYSTEM_PROMPT),
                ChatMessage::user(text),
            ],
            max_tokens: CHAT_MAX_TOKENS,
            temperature: CHAT_TEMPERATURE,
        };

        let response = self
            .http
            .post(&url)
            .header("api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Upstream { status, body });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))?;

        let answer = completion
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| {
                ProviderError::Malformed("chat completion returned no choices".to_string())
            })?;

        Ok(ChatAnswer {
            answer,
            usage: completion.usage,
        })
    }
}
