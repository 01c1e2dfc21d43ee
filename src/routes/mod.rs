//! Router assembly.

mod product;
pub use product::product_routes;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Largest accepted request body. Enforced by the body extractors, so an
/// oversized body surfaces as a JSON 400 like any other malformed body.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Full application: routes, tracing and body limit.
pub fn app(state: AppState) -> Router {
    product_routes(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES)),
    )
}
