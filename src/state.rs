// src/state.rs
use std::sync::Arc;

use sqlx::PgPool;

use crate::services::catalog::CatalogService;
use crate::store::PgProductStore;

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
}

impl AppState {
    pub fn new(db_pool: PgPool) -> Self {
        Self {
            catalog: CatalogService::new(Arc::new(PgProductStore::new(db_pool))),
        }
    }
}
