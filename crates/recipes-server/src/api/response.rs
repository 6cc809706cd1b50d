//! API response types
//!
//! Every failure leaves the server as an [`ErrorResponse`]:
//!
//! ```json
//! {
//!   "status": 400,
//!   "message": "Recipe Name can not be null or empty",
//!   "dateTime": "2024-05-01T10:15:30Z",
//!   "errors": [{ "field": "name", "message": "Recipe Name can not be null or empty" }]
//! }
//! ```
//!
//! `errors` is only present for field validation failures.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::features::shared::FieldError;

/// Standard error response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
    pub date_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldErrorBody>>,
}

/// Wire form of a single field failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrorBody {
    pub field: String,
    pub message: String,
}

impl From<FieldError> for FieldErrorBody {
    fn from(err: FieldError) -> Self {
        Self {
            field: err.field,
            message: err.message,
        }
    }
}

impl ErrorResponse {
    /// Create a new error response stamped with the current time
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            date_time: Utc::now(),
            errors: None,
        }
    }

    /// Create an error response listing the rejected fields
    pub fn with_field_errors(
        status: StatusCode,
        message: impl Into<String>,
        errors: Vec<FieldError>,
    ) -> Self {
        Self {
            errors: Some(errors.into_iter().map(FieldErrorBody::from).collect()),
            ..Self::new(status, message)
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_shape() {
        let body = ErrorResponse::new(StatusCode::NOT_FOUND, "Recipe not found");
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["status"], 404);
        assert_eq!(value["message"], "Recipe not found");
        assert!(value["dateTime"].is_string());
        assert!(value.get("errors").is_none());
    }

    #[test]
    fn test_field_errors_are_listed() {
        let body = ErrorResponse::with_field_errors(
            StatusCode::BAD_REQUEST,
            "Validation failed",
            vec![FieldError::new("name", "Recipe Name can not be null or empty")],
        );
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["status"], 400);
        assert_eq!(value["errors"][0]["field"], "name");
        assert_eq!(value["errors"][0]["message"], "Recipe Name can not be null or empty");
    }

    #[test]
    fn test_into_response_uses_status() {
        let response = ErrorResponse::new(StatusCode::BAD_REQUEST, "bad").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
