//! ProductStore: entity operations over a backing store.

mod crud;
mod memory;
pub use crud::PgProductStore;
pub use memory::MemoryProductStore;

use crate::error::AppError;
use crate::product::{Product, ProductId, ProductInput};
use async_trait::async_trait;

/// Page size used when the caller asks for zero or fewer rows.
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 1000;

/// Store contract. Implementations never log or retry; they return a
/// classified [`AppError`] and leave the HTTP mapping to the handlers.
///
/// `update` and `delete` decide `NotFound` from the mutation's own affected
/// rows, never from a prior existence check.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn create(&self, input: ProductInput) -> Result<Product, AppError>;

    async fn get(&self, id: ProductId) -> Result<Product, AppError>;

    async fn update(&self, id: ProductId, input: ProductInput) -> Result<Product, AppError>;

    async fn delete(&self, id: ProductId) -> Result<(), AppError>;

    /// Up to `limit` products ordered by ascending id, skipping `offset`. See [`Pagination`].
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Product>, AppError>;

    /// Round-trip to the backing store (readiness).
    async fn ping(&self) -> Result<(), AppError>;
}

/// Clamped offset/limit pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub offset: i64,
    pub limit: i64,
}

impl Pagination {
    /// `limit <= 0` becomes [`DEFAULT_LIMIT`], `limit` is capped at [`MAX_LIMIT`], `offset < 0` becomes 0.
    pub fn new(offset: i64, limit: i64) -> Self {
        let limit = if limit <= 0 { DEFAULT_LIMIT } else { limit.min(MAX_LIMIT) };
        Pagination {
            offset: offset.max(0),
            limit,
        }
    }
}
