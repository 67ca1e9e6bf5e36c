// src/handlers/product.rs
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::instrument;

use crate::dtos::product::{ListProductsQuery, ProductRequest, ProductResponse};
use crate::error::AppError;
use crate::services::catalog::CatalogError;
use crate::state::AppState;

fn product_error(err: CatalogError, id: i64) -> AppError {
    match err {
        CatalogError::NotFound => AppError::not_found(format!("Product with ID {id} not found")),
        other => other.into(),
    }
}

// GET /products - List all products, optionally filtered by ?search=
#[instrument(skip(state))]
pub async fn get_products(
    State(state): State<AppState>,
    Query(params): Query<ListProductsQuery>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state.catalog.list_products(params.search.as_deref()).await?;
    let response = products.into_iter().map(ProductResponse::from).collect();
    Ok(Json(response))
}

// GET /products/:id - Get single product
#[instrument(skip(state))]
pub async fn get_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state
        .catalog
        .get_product(id)
        .await
        .map_err(|e| product_error(e, id))?;

    Ok(Json(ProductResponse::from(product)))
}

// POST /products - Create new product
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductRequest>,
) -> Result<impl IntoResponse, AppError> {
    let product = state.catalog.create_product(payload).await?;
    let location = format!("/api/products/{}", product.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ProductResponse::from(product)),
    ))
}

// PUT /products/:id - Update product
#[instrument(skip(state, payload))]
pub async fn update_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<ProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state
        .catalog
        .update_product(id, payload)
        .await
        .map_err(|e| product_error(e, id))?;

    Ok(Json(ProductResponse::from(product)))
}

// DELETE /products/:id - Delete product
#[instrument(skip(state))]
pub async fn delete_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state
        .catalog
        .delete_product(id)
        .await
        .map_err(|e| product_error(e, id))?;

    Ok(StatusCode::NO_CONTENT)
}
