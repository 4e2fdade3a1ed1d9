//! HTTP request handlers
//!
//! This module organizes the relay's handlers into logical groups:
//! - `chat` - completion proxy (text translation)
//! - `health` - liveness probe
//! - `session` - realtime session credential issuance
//! - `webrtc` - SDP negotiation proxy

pub mod chat;
pub mod health;
pub mod session;
pub mod webrtc;

// Re-export commonly used handlers for convenient access
pub use chat::send_question;
pub use health::health_check;
pub use session::mint_ephemeral_key;
pub use webrtc::create_webrtc_session;
