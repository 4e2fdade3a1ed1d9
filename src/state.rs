//! Shared application state.

use std::sync::Arc;

use crate::config::RelayConfig;
use crate::provider::{AzureOpenAiClient, ProviderError};

/// State shared by all request handlers.
///
/// Constructed once at startup and never mutated; handlers only read the
/// configuration and issue calls through the provider client.
#[derive(Debug)]
pub struct AppState {
    pub config: RelayConfig,
    pub provider: AzureOpenAiClient,
}

impl AppState {
    /// Build the shared state, including the outbound HTTP client.
    pub fn new(config: RelayConfig) -> Result<Arc<Self>, ProviderError> {
        let provider = AzureOpenAiClient::new(&config)?;
        Ok(Arc::new(Self { config, provider }))
    }
}
