//! Operational handlers: liveness, readiness, build info.

use crate::response::ok;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// GET /health; never touches the store.
pub async fn health() -> impl IntoResponse {
    ok(json!({ "status": "ok" }))
}

/// GET /ready; 503 while the store cannot be reached.
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.ping().await {
        Ok(()) => ok(json!({ "status": "ok", "database": "ok" })),
        Err(e) => {
            tracing::warn!(error = %e, "store unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "degraded", "database": "unavailable" })),
            )
        }
    }
}

/// GET /version
pub async fn version() -> impl IntoResponse {
    ok(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
