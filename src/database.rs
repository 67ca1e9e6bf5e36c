// src/database.rs
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

/// Create a connection pool from a database URL.
///
/// `acquire_timeout` keeps a dead database from hanging requests; the
/// timeout surfaces as a `sqlx::Error` and maps to a 500 upstream.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}
