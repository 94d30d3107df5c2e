//! Liveness endpoints.

use axum::Json;
use axum::http::StatusCode;

/// `GET /healthz`
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// `GET /api/v1/health`
pub async fn api_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": env!("CARGO_PKG_NAME"),
    }))
}
