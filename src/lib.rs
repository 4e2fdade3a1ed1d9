pub mod config;
pub mod errors;
pub mod handlers;
pub mod provider;
pub mod routes;
pub mod state;

// Re-export commonly used items for convenience
pub use config::RelayConfig;
pub use errors::relay_error::{ErrorBody, RelayError, RelayResult};
pub use state::AppState;
