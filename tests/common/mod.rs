//! Shared test doubles for the `ProductStore` seam.
#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use catalog_backend::models::product::{NewProduct, Product, ProductChanges};
use catalog_backend::store::ProductStore;

/// In-memory `ProductStore` with the same observable semantics as the
/// Postgres implementation: monotonic ids that are never reused, newest-first
/// ordering with id as tie-break, and case-sensitive literal substring
/// filtering.
#[derive(Default)]
pub struct InMemoryProductStore {
    rows: Mutex<Vec<Product>>,
    next_id: AtomicI64,
}

impl InMemoryProductStore {
    fn sorted_newest_first(&self) -> Vec<Product> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.id.cmp(&a.id))
        });
        rows
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn insert(&self, product: NewProduct) -> Result<Product, sqlx::Error> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let row = Product {
            id,
            name: product.name,
            description: product.description,
            price: product.price,
            image_url: product.image_url,
            created_at: product.created_at,
            updated_at: product.updated_at,
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Product>, sqlx::Error> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|p| p.id == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Product>, sqlx::Error> {
        Ok(self.sorted_newest_first())
    }

    async fn filter_by_substring(&self, term: &str) -> Result<Vec<Product>, sqlx::Error> {
        Ok(self
            .sorted_newest_first()
            .into_iter()
            .filter(|p| p.name.contains(term) || p.description.contains(term))
            .collect())
    }

    async fn update(&self, id: i64, changes: ProductChanges) -> Result<Option<Product>, sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|p| p.id == id).map(|row| {
            row.name = changes.name;
            row.description = changes.description;
            row.price = changes.price;
            row.image_url = changes.image_url;
            row.updated_at = changes.updated_at;
            row.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != id);
        Ok(rows.len() < before)
    }
}

/// Store whose every operation fails, for exercising the storage-fault path.
pub struct FailingStore;

#[async_trait]
impl ProductStore for FailingStore {
    async fn insert(&self, _product: NewProduct) -> Result<Product, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn get_by_id(&self, _id: i64) -> Result<Option<Product>, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn list_all(&self) -> Result<Vec<Product>, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn filter_by_substring(&self, _term: &str) -> Result<Vec<Product>, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn update(
        &self,
        _id: i64,
        _changes: ProductChanges,
    ) -> Result<Option<Product>, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn delete(&self, _id: i64) -> Result<bool, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }
}
