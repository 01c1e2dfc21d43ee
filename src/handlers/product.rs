//! Product handlers: list, create, read, update, delete.

use crate::error::AppError;
use crate::product::{NewProduct, ProductId};
use crate::response::{created, ok};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::collections::HashMap;

/// Non-integers are a 400. Integers outside the id range cannot name a row.
fn parse_id(id_str: &str) -> Result<ProductId, AppError> {
    let n: i64 = id_str
        .parse()
        .map_err(|_| AppError::validation("id", format!("'{}' is not an integer", id_str)))?;
    ProductId::try_from(n).map_err(|_| AppError::NotFound(n))
}

/// Missing or unparseable values count as 0; the store clamps them.
fn query_int(params: &HashMap<String, String>, key: &str) -> i64 {
    params.get(key).and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

/// GET /products?offset&limit
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let offset = query_int(&params, "offset");
    let limit = query_int(&params, "limit");
    let rows = state.store.list(offset, limit).await?;
    Ok(ok(rows))
}

/// POST /product
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewProduct>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body?;
    let input = body.validate()?;
    let product = state.store.create(input).await?;
    tracing::debug!(id = product.id, "product created");
    Ok(created(product))
}

/// GET /product/:id
pub async fn read(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id_str) = path?;
    let id = parse_id(&id_str)?;
    let product = state.store.get(id).await?;
    Ok(ok(product))
}

/// PUT /product/:id
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<NewProduct>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id_str) = path?;
    let id = parse_id(&id_str)?;
    let Json(body) = body?;
    let input = body.validate()?;
    let product = state.store.update(id, input).await?;
    Ok(ok(product))
}

/// DELETE /product/:id
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id_str) = path?;
    let id = parse_id(&id_str)?;
    state.store.delete(id).await?;
    tracing::debug!(id, "product deleted");
    Ok(StatusCode::NO_CONTENT)
}
