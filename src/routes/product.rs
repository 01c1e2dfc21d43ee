//! Product CRUD routes plus the service's operational endpoints.

use crate::handlers::health::{health, ready, version};
use crate::handlers::product::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/products", get(list))
        .route("/product", post(create))
        .route("/product/:id", get(read).put(update).delete(delete_handler))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
