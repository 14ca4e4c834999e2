//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use domain_booking::BookingError;
use domain_catalog::CatalogError;

use crate::auth::AuthError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        details: Vec<String>,
    },

    #[error("Not quotable: {0}")]
    NotQuotable(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, details) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "unauthorized", msg, None),
            ApiError::Validation { message, details } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                message,
                Some(details),
            ),
            ApiError::NotQuotable(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "not_quotable", msg, None)
            }
            ApiError::Internal(msg) => {
                error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg, None)
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::Validation(report) => ApiError::Validation {
                message: "Please fix the errors in the form".to_string(),
                details: report
                    .errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect(),
            },
            BookingError::NotQuotable(reason) => ApiError::NotQuotable(reason.to_string()),
            BookingError::PolicyMissing(room_id) => {
                ApiError::NotFound(format!("No pricing policy for room {}", room_id))
            }
            other @ BookingError::InvalidPolicy(_) => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::RoomNotFound(id) => ApiError::NotFound(format!("Room {} not found", id)),
            CatalogError::InvalidQuery(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::Unauthorized(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::RoomId;
    use domain_booking::{NotQuotable, ValidationReport};

    #[test]
    fn test_validation_report_becomes_details() {
        let mut report = ValidationReport::ok();
        report.add_error("email", "Email is invalid");

        match ApiError::from(BookingError::Validation(report)) {
            ApiError::Validation { details, .. } => {
                assert_eq!(details, vec!["email: Email is invalid".to_string()])
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (ApiError::from(CatalogError::room_not_found(RoomId::from("9"))), StatusCode::NOT_FOUND),
            (ApiError::from(BookingError::from(NotQuotable::ZeroBasePrice)), StatusCode::UNPROCESSABLE_ENTITY),
            (ApiError::from(BookingError::policy_missing("9")), StatusCode::NOT_FOUND),
            (ApiError::from(CatalogError::InvalidQuery("sort".into())), StatusCode::BAD_REQUEST),
            (ApiError::from(AuthError::InvalidToken), StatusCode::UNAUTHORIZED),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }
}
