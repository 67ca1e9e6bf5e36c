// src/services/catalog.rs
//
// All business rules for the product catalog live here: field validation,
// timestamp lifecycle, and search dispatch. The store underneath is a dumb
// persistence primitive; the handlers above only translate outcomes into
// HTTP responses.
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use validator::ValidateUrl;

use crate::dtos::product::ProductRequest;
use crate::models::product::{NewProduct, Product, ProductChanges};
use crate::store::ProductStore;

pub const NAME_MAX_LENGTH: usize = 100;
pub const DESCRIPTION_MAX_LENGTH: usize = 500;

/// One violated field constraint. A failed validation carries every
/// violation, not just the first, so a caller sees all problems at once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub enum CatalogError {
    /// Caller-supplied data violates field constraints; recoverable by
    /// correcting the input.
    Validation(Vec<FieldViolation>),
    /// The referenced id does not exist. A defined outcome, not a fault.
    NotFound,
    /// The backing store is unreachable or erroring. Surfaced to the
    /// caller unretried; retry/backoff policy is theirs.
    Storage(sqlx::Error),
}

/// Validate a candidate product against the field constraints.
///
/// Trimming only decides whether a text field is empty; length limits are
/// checked on the value as given, and the stored value is never altered.
pub fn validate(candidate: &ProductRequest) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    if candidate.name.trim().is_empty() {
        violations.push(FieldViolation::new("name", "Product name is required"));
    } else if candidate.name.chars().count() > NAME_MAX_LENGTH {
        violations.push(FieldViolation::new(
            "name",
            format!("Product name cannot exceed {NAME_MAX_LENGTH} characters"),
        ));
    }

    if candidate.description.trim().is_empty() {
        violations.push(FieldViolation::new(
            "description",
            "Product description is required",
        ));
    } else if candidate.description.chars().count() > DESCRIPTION_MAX_LENGTH {
        violations.push(FieldViolation::new(
            "description",
            format!("Description cannot exceed {DESCRIPTION_MAX_LENGTH} characters"),
        ));
    }

    if candidate.price <= 0.0 {
        violations.push(FieldViolation::new("price", "Price must be greater than 0"));
    }

    if let Some(url) = &candidate.image_url {
        if !url.validate_url() {
            violations.push(FieldViolation::new(
                "image_url",
                "Image URL must be a valid absolute URL",
            ));
        }
    }

    violations
}

/// Orchestrates validation, timestamps and search policy over a store
/// handle. Cheap to clone; holds no per-request state, so any number of
/// instances can run behind a stateless load balancer.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn ProductStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// List the catalog, optionally filtered by a search term.
    ///
    /// Trimming is only used to decide whether a term was supplied at all;
    /// the match itself runs on the term exactly as given, so leading or
    /// trailing whitespace still participates in matching.
    pub async fn list_products(&self, search: Option<&str>) -> Result<Vec<Product>, CatalogError> {
        match search {
            Some(term) if !term.trim().is_empty() => self
                .store
                .filter_by_substring(term)
                .await
                .map_err(CatalogError::Storage),
            _ => self.store.list_all().await.map_err(CatalogError::Storage),
        }
    }

    pub async fn get_product(&self, id: i64) -> Result<Product, CatalogError> {
        self.store
            .get_by_id(id)
            .await
            .map_err(CatalogError::Storage)?
            .ok_or(CatalogError::NotFound)
    }

    /// Validate and persist a new product. Both timestamps come from a
    /// single clock read, so a freshly created product always satisfies
    /// `created_at == updated_at`.
    pub async fn create_product(&self, candidate: ProductRequest) -> Result<Product, CatalogError> {
        let violations = validate(&candidate);
        if !violations.is_empty() {
            return Err(CatalogError::Validation(violations));
        }

        let now = Utc::now();
        let product = NewProduct {
            name: candidate.name,
            description: candidate.description,
            price: candidate.price,
            image_url: candidate.image_url,
            created_at: now,
            updated_at: now,
        };

        self.store.insert(product).await.map_err(CatalogError::Storage)
    }

    /// Overwrite a product's mutable fields.
    ///
    /// Validation runs before the existence check: an invalid payload
    /// against a nonexistent id reports the validation failure. The write
    /// itself is one atomic store update, which preserves `id` and
    /// `created_at` and refreshes `updated_at`.
    pub async fn update_product(
        &self,
        id: i64,
        candidate: ProductRequest,
    ) -> Result<Product, CatalogError> {
        let violations = validate(&candidate);
        if !violations.is_empty() {
            return Err(CatalogError::Validation(violations));
        }

        let changes = ProductChanges {
            name: candidate.name,
            description: candidate.description,
            price: candidate.price,
            image_url: candidate.image_url,
            updated_at: Utc::now(),
        };

        self.store
            .update(id, changes)
            .await
            .map_err(CatalogError::Storage)?
            .ok_or(CatalogError::NotFound)
    }

    /// Remove a product. Deleting an id that does not exist is `NotFound`,
    /// so a repeated delete fails the same way rather than erroring.
    pub async fn delete_product(&self, id: i64) -> Result<(), CatalogError> {
        let existed = self
            .store
            .delete(id)
            .await
            .map_err(CatalogError::Storage)?;

        if existed {
            Ok(())
        } else {
            Err(CatalogError::NotFound)
        }
    }
}
