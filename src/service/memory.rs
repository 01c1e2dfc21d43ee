//! In-process ProductStore with the same contract as the Postgres one.

use super::{Pagination, ProductStore};
use crate::error::AppError;
use crate::product::{Product, ProductId, ProductInput};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct Table {
    /// Last id handed out; ids are never reused, like a SERIAL sequence.
    last_id: ProductId,
    rows: BTreeMap<ProductId, Product>,
}

/// Ordered map behind a mutex. Each call takes the lock once, so every
/// operation is atomic with respect to the others.
#[derive(Default)]
pub struct MemoryProductStore {
    table: Mutex<Table>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn create(&self, input: ProductInput) -> Result<Product, AppError> {
        let mut table = self.lock();
        // Same outcome as nextval() past the sequence maximum: a storage failure.
        let id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| AppError::Storage(sqlx::Error::Protocol("product id sequence exhausted".into())))?;
        table.last_id = id;
        let product = input.with_id(id);
        table.rows.insert(product.id, product.clone());
        Ok(product)
    }

    async fn get(&self, id: ProductId) -> Result<Product, AppError> {
        self.lock().rows.get(&id).cloned().ok_or(AppError::NotFound(id.into()))
    }

    async fn update(&self, id: ProductId, input: ProductInput) -> Result<Product, AppError> {
        let mut table = self.lock();
        let row = table.rows.get_mut(&id).ok_or(AppError::NotFound(id.into()))?;
        *row = input.with_id(id);
        Ok(row.clone())
    }

    async fn delete(&self, id: ProductId) -> Result<(), AppError> {
        match self.lock().rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(id.into())),
        }
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Product>, AppError> {
        let page = Pagination::new(offset, limit);
        let table = self.lock();
        Ok(table
            .rows
            .values()
            .skip(usize::try_from(page.offset).unwrap_or(usize::MAX))
            .take(usize::try_from(page.limit).unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
