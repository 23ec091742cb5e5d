// Error handling types for the API

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::fmt;
use tracing::error;

/// API error types
///
/// Authentication faults carry the stable machine-readable codes clients
/// key on (`authorization_header_missing`, `invalid_header`,
/// `token_expired`, `invalid_claims`, and the legacy `Unauthorized` code
/// for scope failures). Data-access faults are logged with their real cause
/// and surfaced as a generic 500 so SQL detail never reaches a client.
#[derive(Debug)]
pub enum ApiError {
    AuthHeaderMissing,
    InvalidAuthHeader(String),
    TokenExpired,
    InvalidClaims,
    InsufficientScope,
    BadRequest(String),
    NotFound(String),
    InternalServer(String),
    ServiceUnavailable(String),
    DatabaseError(sqlx::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::AuthHeaderMissing => write!(f, "Authorization header is expected"),
            ApiError::InvalidAuthHeader(msg) => write!(f, "Invalid Authorization header: {}", msg),
            ApiError::TokenExpired => write!(f, "Token is expired"),
            ApiError::InvalidClaims => write!(f, "Incorrect token claims"),
            ApiError::InsufficientScope => write!(f, "Required scope is missing"),
            ApiError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ApiError::InternalServer(msg) => write!(f, "Internal Server Error: {}", msg),
            ApiError::ServiceUnavailable(msg) => write!(f, "Service Unavailable: {}", msg),
            ApiError::DatabaseError(e) => write!(f, "Database Error: {}", e),
        }
    }
}

/// JSON error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub description: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, code, description) = match self {
            ApiError::AuthHeaderMissing => (
                StatusCode::UNAUTHORIZED,
                "authorization_header_missing",
                "Authorization header is expected".to_string(),
            ),
            ApiError::InvalidAuthHeader(msg) => (StatusCode::UNAUTHORIZED, "invalid_header", msg),
            ApiError::TokenExpired => (
                StatusCode::UNAUTHORIZED,
                "token_expired",
                "Token is expired".to_string(),
            ),
            ApiError::InvalidClaims => (
                StatusCode::UNAUTHORIZED,
                "invalid_claims",
                "Incorrect claims. Please check the audience and issuer".to_string(),
            ),
            ApiError::InsufficientScope => (
                StatusCode::FORBIDDEN,
                "Unauthorized",
                "You don't have access to this resource".to_string(),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::InternalServer(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg)
            }
            ApiError::ServiceUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "service_unavailable", msg)
            }
            ApiError::DatabaseError(e) => {
                error!(error = %e, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "Database operation failed".to_string(),
                )
            }
        };

        let error_response = ErrorResponse {
            code: code.to_string(),
            description,
        };

        (status, Json(error_response)).into_response()
    }
}
