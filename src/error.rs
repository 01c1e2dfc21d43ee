//! Typed errors and HTTP mapping.

use crate::response::error_body;
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Body sent with every 404 from the product routes.
pub const PRODUCT_NOT_FOUND: &str = "Product not found";

const INTERNAL_ERROR: &str = "internal server error";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed or incomplete input; never reaches the store.
    #[error("invalid {field}: {message}")]
    Validation { field: &'static str, message: String },
    /// Carries the id as requested, which may lie outside the column range.
    #[error("product {0} not found")]
    NotFound(i64),
    #[error("storage: {0}")]
    Storage(#[from] sqlx::Error),
}

impl AppError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        AppError::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::validation("body", rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::validation("id", rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Validation { .. } => self.to_string(),
            AppError::NotFound(_) => PRODUCT_NOT_FOUND.to_string(),
            AppError::Storage(sqlx::Error::RowNotFound) => PRODUCT_NOT_FOUND.to_string(),
            AppError::Storage(e) => {
                tracing::error!(error = %e, "storage failure");
                INTERNAL_ERROR.to_string()
            }
        };
        (status, Json(error_body(message))).into_response()
    }
}
