//! Route configuration grouped by concern.

pub mod api;
pub mod assets;
