pub mod analyze;
pub mod health;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API information for the root route
pub async fn api_info() -> impl IntoResponse {
    Json(json!({
        "name": "labellens-server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "GET /health",
            "ready": "GET /ready",
            "analyze": "POST /api/v1/analyze",
        }
    }))
}

/// Fallback handler for unknown routes
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": {
                "code": "NOT_FOUND",
                "message": "unknown route",
            }
        })),
    )
}
