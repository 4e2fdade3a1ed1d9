//! Error types shared across the relay.

pub mod relay_error;

pub use relay_error::{ErrorBody, RelayError, RelayResult};
