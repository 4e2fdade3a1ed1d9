//! Azure OpenAI provider configuration types.
//!
//! This module contains the fixed API version strings and the session
//! parameters (voice, noise reduction) used when minting realtime session
//! credentials.

use serde::{Deserialize, Serialize};

/// API version for chat completion requests.
pub const CHAT_API_VERSION: &str = "2024-12-01-preview";

/// API version for realtime session credential requests.
pub const REALTIME_SESSIONS_API_VERSION: &str = "2025-04-01-preview";

/// Path of the realtime session creation endpoint, relative to the resource base URL.
pub const REALTIME_SESSIONS_PATH: &str = "/openai/realtimeapi/sessions";

// =============================================================================
// Voices
// =============================================================================

/// Available voices for the Azure OpenAI Realtime API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RealtimeVoice {
    /// Alloy voice (default)
    #[default]
    Alloy,
    /// Ash voice
    Ash,
    /// Ballad voice
    Ballad,
    /// Coral voice
    Coral,
    /// Echo voice
    Echo,
    /// Sage voice
    Sage,
    /// Shimmer voice
    Shimmer,
    /// Verse voice
    Verse,
}

impl RealtimeVoice {
    /// Convert to the API parameter value.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alloy => "alloy",
            Self::Ash => "ash",
            Self::Ballad => "ballad",
            Self::Coral => "coral",
            Self::Echo => "echo",
            Self::Sage => "sage",
            Self::Shimmer => "shimmer",
            Self::Verse => "verse",
        }
    }

    /// Parse from string, with fallback to default.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "alloy" => Self::Alloy,
            "ash" => Self::Ash,
            "ballad" => Self::Ballad,
            "coral" => Self::Coral,
            "echo" => Self::Echo,
            "sage" => Self::Sage,
            "shimmer" => Self::Shimmer,
            "verse" => Self::Verse,
            _ => Self::default(),
        }
    }
}

impl std::fmt::Display for RealtimeVoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Noise reduction
// =============================================================================

/// Input audio noise reduction modes for realtime sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseReductionMode {
    /// Near-field microphone, e.g. a headset (default)
    #[default]
    NearField,
    /// Far-field microphone, e.g. a conference room
    FarField,
}

impl NoiseReductionMode {
    /// Convert to the API parameter value.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NearField => "near_field",
            Self::FarField => "far_field",
        }
    }

    /// Parse from string, with fallback to default.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "near_field" | "nearfield" | "near" => Self::NearField,
            "far_field" | "farfield" | "far" => Self::FarField,
            _ => Self::default(),
        }
    }
}

impl std::fmt::Display for NoiseReductionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Tests
// =============================================================================
