//! Error types for the REST API.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

use crate::db::DbError;

#[cfg(test)]
mod tests;

/// API error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
    /// Error code.
    pub code: String,
}

/// API error types.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Indice outside the recognized set.
    #[error("Invalid indice: {0}")]
    InvalidIndice(String),

    /// Missing or malformed request parameter.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// No database connection could be established for this request.
    #[error("Database unavailable")]
    ServiceUnavailable,

    /// No row matched the lookup.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Query execution failure.
    #[error("Database error: {0}")]
    Database(String),

    /// Any other unexpected fault.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::InvalidIndice(_) => (StatusCode::BAD_REQUEST, "INVALID_INDICE"),
            ApiError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
            ApiError::ServiceUnavailable => {
                (StatusCode::SERVICE_UNAVAILABLE, "DATABASE_UNAVAILABLE")
            }
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // 500-class detail goes to the server log; clients get a generic
        // message. 4xx responses carry their descriptive text.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("{self}");
            "An error occurred".to_string()
        } else {
            self.to_string()
        };

        let body = Json(ErrorResponse {
            error: message,
            code: code.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(_: DbError) -> Self {
        // Both the missing-descriptor and failed-connect cases degrade the
        // request to service-unavailable; detail is already logged at the
        // acquire site.
        ApiError::ServiceUnavailable
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Database(err.to_string())
    }
}
