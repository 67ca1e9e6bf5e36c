// src/store/product.rs
use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::product::{NewProduct, Product, ProductChanges};

/// Durable CRUD primitives for products. No business rules live here:
/// the store assigns ids and persists rows, nothing more. `sqlx::Error`
/// is the storage-unavailable channel surfaced to the caller.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Assign a fresh id and persist the row.
    async fn insert(&self, product: NewProduct) -> Result<Product, sqlx::Error>;

    /// Point lookup. `None` is a defined outcome, not an error.
    async fn get_by_id(&self, id: i64) -> Result<Option<Product>, sqlx::Error>;

    /// All rows, most recently created first; ties broken by id descending.
    async fn list_all(&self) -> Result<Vec<Product>, sqlx::Error>;

    /// Rows where `term` occurs as a case-sensitive literal substring of
    /// name or description; same ordering as `list_all`.
    async fn filter_by_substring(&self, term: &str) -> Result<Vec<Product>, sqlx::Error>;

    /// Overwrite the mutable fields of the row matching `id` in a single
    /// atomic statement. `None` when no such row exists.
    async fn update(&self, id: i64, changes: ProductChanges) -> Result<Option<Product>, sqlx::Error>;

    /// Hard delete. Returns whether a row existed.
    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error>;
}

pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn insert(&self, product: NewProduct) -> Result<Product, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, description, price, image_url, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, name, description,
                       price::FLOAT8 AS price,
                       image_url, created_at, updated_at",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.image_url)
        .bind(product.created_at)
        .bind(product.updated_at)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, description,
                    price::FLOAT8 AS price,
                    image_url, created_at, updated_at
             FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn list_all(&self) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, description,
                    price::FLOAT8 AS price,
                    image_url, created_at, updated_at
             FROM products
             ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn filter_by_substring(&self, term: &str) -> Result<Vec<Product>, sqlx::Error> {
        // strpos keeps the term literal: % and _ have no special meaning here.
        sqlx::query_as::<_, Product>(
            "SELECT id, name, description,
                    price::FLOAT8 AS price,
                    image_url, created_at, updated_at
             FROM products
             WHERE strpos(name, $1) > 0 OR strpos(description, $1) > 0
             ORDER BY created_at DESC, id DESC",
        )
        .bind(term)
        .fetch_all(&self.pool)
        .await
    }

    async fn update(&self, id: i64, changes: ProductChanges) -> Result<Option<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "UPDATE products SET
                 name = $1,
                 description = $2,
                 price = $3,
                 image_url = $4,
                 updated_at = $5
             WHERE id = $6
             RETURNING id, name, description,
                       price::FLOAT8 AS price,
                       image_url, created_at, updated_at",
        )
        .bind(&changes.name)
        .bind(&changes.description)
        .bind(changes.price)
        .bind(&changes.image_url)
        .bind(changes.updated_at)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
