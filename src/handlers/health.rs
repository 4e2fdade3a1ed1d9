//! Liveness probe.

use axum::Json;
use serde_json::{Value, json};

/// Handler for GET /healthz - reports that the relay process is up.
///
/// Makes no outbound calls; a healthy relay with a misbehaving provider
/// still answers OK here.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check_reports_ok() {
        let Json(body) = health_check().await;
        assert_eq!(body["status"], "OK");
        assert_eq!(body["service"], "voz-relay");
    }
}
