//! Server-specific error types
//!
//! [`AppError`] is the only error an HTTP handler returns. Feature errors are
//! converted into it in their route modules; extractor rejections convert
//! through the `From` impls below.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::response::ErrorResponse;
use crate::db::DbError;
use crate::features::shared::ValidationErrors;

/// Message returned for every missing recipe
pub const RECIPE_NOT_FOUND: &str = "Recipe not found";

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

impl AppError {
    pub fn recipe_not_found() -> Self {
        Self::NotFound(RECIPE_NOT_FOUND.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::NotFound(message) | AppError::BadRequest(message) => {
                ErrorResponse::new(status, message)
            },
            AppError::Validation(errors) => {
                let message = errors.to_string();
                ErrorResponse::with_field_errors(status, message, errors.into_errors())
            },
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                ErrorResponse::new(status, "A database error occurred")
            },
        };

        body.into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
