// src/error.rs
use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde_json::json;

use crate::services::catalog::{CatalogError, FieldViolation};

#[derive(Debug)]
pub enum AppError {
    Database(sqlx::Error),
    NotFound(String),
    Validation(Vec<FieldViolation>),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // The sqlx error may embed connection details; it goes to the
            // log, never into the response body.
            AppError::Database(err) => {
                tracing::error!(error = ?err, "Storage error");
                let body = Json(json!({ "error": "A storage error occurred" }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
            AppError::NotFound(message) => {
                let body = Json(json!({ "error": message }));
                (StatusCode::NOT_FOUND, body).into_response()
            }
            AppError::Validation(fields) => {
                let body = Json(json!({
                    "error": "Validation failed",
                    "fields": fields,
                }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err)
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Validation(fields) => AppError::Validation(fields),
            CatalogError::NotFound => AppError::not_found("Product not found"),
            CatalogError::Storage(err) => AppError::Database(err),
        }
    }
}
