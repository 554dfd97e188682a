use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

use crate::state::ServerState;

/// Liveness probe
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Readiness probe. The index is built before the listener starts, so a
/// responding server is a ready server; the alias counts let operators
/// spot a suspiciously thin dataset at a glance.
pub async fn readiness_check(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    Json(json!({
        "status": "ready",
        "fda_aliases": state.analyzer.index().fda_len(),
        "common_aliases": state.analyzer.index().common_len(),
        "uptime_seconds": state.started_at.elapsed().as_secs(),
    }))
}
