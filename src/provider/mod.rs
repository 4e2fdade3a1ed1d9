//! Azure OpenAI provider integration.
//!
//! - `client` - outbound HTTP client for session minting, SDP negotiation,
//!   and chat completion
//! - `config` - fixed API versions, voice and noise reduction parameters
//! - `messages` - request/response wire types

pub mod client;
pub mod config;
pub mod messages;

pub use client::{AzureOpenAiClient, ChatAnswer, ProviderError, SdpAnswer};
pub use config::{NoiseReductionMode, RealtimeVoice};
