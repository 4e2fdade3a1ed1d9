//! Static asset route configuration.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use tower_http::services::ServeFile;

use crate::state::AppState;

/// Create the router serving the client entry page at `/`.
///
/// Query parameters are ignored; there is no other static-asset routing.
pub fn create_asset_router(index: &Path) -> Router<Arc<AppState>> {
    Router::new().route_service("/", ServeFile::new(index.to_path_buf()))
}
