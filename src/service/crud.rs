//! Product CRUD against PostgreSQL.

use super::{Pagination, ProductStore};
use crate::error::AppError;
use crate::product::{Product, ProductId, ProductInput};
use crate::sql::ProductQueries;
use async_trait::async_trait;
use sqlx::PgPool;

/// Pass-through store over a shared pool. Holds no state besides the pool
/// and the prepared SQL text.
#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
    queries: ProductQueries,
}

impl PgProductStore {
    pub fn new(pool: PgPool, schema: &str) -> Self {
        PgProductStore {
            pool,
            queries: ProductQueries::new(schema),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the products table if it does not exist.
    pub async fn ensure_table(&self) -> Result<(), AppError> {
        sqlx::query(&self.queries.create_table())
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn create(&self, input: ProductInput) -> Result<Product, AppError> {
        let row = sqlx::query_as::<_, Product>(&self.queries.insert)
            .bind(&input.name)
            .bind(input.price)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn get(&self, id: ProductId) -> Result<Product, AppError> {
        sqlx::query_as::<_, Product>(&self.queries.select_by_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound(id.into()))
    }

    async fn update(&self, id: ProductId, input: ProductInput) -> Result<Product, AppError> {
        // RETURNING yields a row only when the UPDATE touched one.
        sqlx::query_as::<_, Product>(&self.queries.update)
            .bind(&input.name)
            .bind(input.price)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound(id.into()))
    }

    async fn delete(&self, id: ProductId) -> Result<(), AppError> {
        let result: sqlx::postgres::PgQueryResult = sqlx::query(&self.queries.delete)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(id.into()));
        }
        Ok(())
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Product>, AppError> {
        let page = Pagination::new(offset, limit);
        let rows = sqlx::query_as::<_, Product>(&self.queries.select_page)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
