/**
 * API Error Types
 *
 * This module defines the error types used in HTTP handlers. Each variant
 * maps to a fixed HTTP status code, and the message carried by the variant
 * is the body the client sees.
 *
 * # Error Categories
 *
 * - `Validation` - the request body is missing required fields
 * - `Unauthorized` - credential or token verification failed
 * - `NotFound` - no route matched the request path
 * - `Internal` - hashing, signing, or persistence failed; the message is
 *   a generic one chosen at the call site, never the underlying error
 * - `Database` - a query failed; the client receives a generic message
 *   while the sqlx error is logged server-side
 */

use axum::http::StatusCode;
use thiserror::Error;

/// API error types
///
/// This enum represents all errors that handlers can return. Each variant
/// carries the client-facing message; use `status_code()` and `message()`
/// when converting to a response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or empty required fields in the request body
    #[error("Validation error: {message}")]
    Validation {
        /// Client-facing error message
        message: String,
    },

    /// Credential or token verification failure
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Client-facing error message
        message: String,
    },

    /// No route matched the request
    #[error("Not found: {message}")]
    NotFound {
        /// Client-facing error message
        message: String,
    },

    /// Hashing, signing, or persistence failure with a call-site message
    ///
    /// The message is a generic string chosen by the handler; the real
    /// cause is logged where the error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// Client-facing error message
        message: String,
    },

    /// Query failure propagated with `?`
    ///
    /// The client always receives a generic message; the sqlx detail is
    /// only logged.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    /// Create a validation error (400)
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an unauthorized error (401)
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a not-found error (404)
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an internal error (500) with a generic client-facing message
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 400 Bad Request
    /// - `Unauthorized` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `Internal` - 500 Internal Server Error
    /// - `Database` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    ///
    /// Query failures never expose the underlying sqlx error; the client
    /// receives a fixed generic message instead.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message }
            | Self::Unauthorized { message }
            | Self::NotFound { message }
            | Self::Internal { message } => message.clone(),
            Self::Database(_) => "Kesalahan server internal".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = ApiError::validation("missing fields");
        match error {
            ApiError::Validation { message } => assert_eq!(message, "missing fields"),
            _ => panic!("Expected Validation"),
        }
    }

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::validation("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::unauthorized("x").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_database_error_message_is_generic() {
        let error = ApiError::from(sqlx::Error::RowNotFound);
        assert_eq!(error.message(), "Kesalahan server internal");
    }

    #[test]
    fn test_error_message() {
        let error = ApiError::unauthorized("Invalid Password");
        assert_eq!(error.message(), "Invalid Password");
    }
}
