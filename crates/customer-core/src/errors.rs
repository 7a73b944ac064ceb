// ABOUTME: Unified error handling with standard error codes and HTTP status mapping
// ABOUTME: Renders AppError into the JSON error bodies the customer API returns
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Unified Error Handling System
//!
//! Every failure the API can report falls into one of three families:
//! validation failures (400, never touch the store), not-found outcomes (404)
//! and storage failures (500, the underlying message is echoed back).
//! `AppError` carries the family as an [`ErrorCode`] and knows how to render
//! itself as a response body.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Request could not be parsed or carried an unusable value
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required field or parameter was absent
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// One or more field rules were violated; details list each rule
    #[serde(rename = "VALIDATION_FAILED")]
    ValidationFailed = 3002,

    // Resource Management (4000-4999)
    /// Zero rows matched the request
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Configuration (6000-6999)
    /// Startup configuration is missing or malformed
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,

    // Internal Errors (9000-9999)
    /// Unexpected failure inside the server
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Any failure reported by the store
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError = 9001,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput | Self::MissingRequiredField | Self::ValidationFailed => 400,
            Self::ResourceNotFound => 404,
            Self::ConfigError | Self::InternalError | Self::DatabaseError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::ValidationFailed => "The request failed validation",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal server error occurred",
            Self::DatabaseError => "Database operation failed",
        }
    }

    /// Whether this code represents a server-side fault
    #[must_use]
    pub const fn is_server_error(self) -> bool {
        self.http_status() >= 500
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Individual rule violations, populated for `ValidationFailed`
    pub details: Vec<String>,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Vec::new(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// JSON body sent to the client for this error
    ///
    /// Validation failures enumerate every violated rule under `errors`;
    /// store failures prefix the underlying message with `Database error:`;
    /// everything else is a single `error` string.
    #[must_use]
    pub fn response_body(&self) -> Value {
        match self.code {
            ErrorCode::ValidationFailed => json!({ "errors": self.details }),
            ErrorCode::DatabaseError => {
                json!({ "error": format!("Database error: {}", self.message) })
            }
            _ => json!({ "error": self.message }),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Resource not found; the message is returned to the client verbatim
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceNotFound, message)
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Required parameter absent
    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingRequiredField, message)
    }

    /// Field validation failed; each entry of `violations` is one broken rule
    #[must_use]
    pub fn validation(violations: Vec<String>) -> Self {
        let mut error = Self::new(
            ErrorCode::ValidationFailed,
            format!("{} validation rule(s) violated", violations.len()),
        );
        error.details = violations;
        error
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        Self::database(error.to_string()).with_source(error)
    }
}

#[cfg(feature = "http-response")]
mod http_response {
    use super::AppError;
    use axum::{
        response::{IntoResponse, Response},
        Json,
    };
    use http::StatusCode;
    use tracing::{debug, error};

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = StatusCode::from_u16(self.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

            if self.code.is_server_error() {
                error!(code = ?self.code, error = %self.message, "Request failed");
            } else {
                debug!(code = ?self.code, error = %self.message, "Request rejected");
            }

            (status, Json(self.response_body())).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
        assert_eq!(ErrorCode::ValidationFailed.http_status(), 400);
        assert_eq!(ErrorCode::ResourceNotFound.http_status(), 404);
        assert_eq!(ErrorCode::DatabaseError.http_status(), 500);
        assert!(ErrorCode::DatabaseError.is_server_error());
        assert!(!ErrorCode::ResourceNotFound.is_server_error());
    }

    #[test]
    fn test_validation_body_lists_every_rule() {
        let error = AppError::validation(vec!["first".to_owned(), "second".to_owned()]);
        let body = error.response_body();

        assert_eq!(body["errors"], json!(["first", "second"]));
        assert!(body.get("error").is_none());
    }

    #[test]
    fn test_database_body_is_prefixed() {
        let error = AppError::database("database is locked");
        assert_eq!(
            error.response_body(),
            json!({ "error": "Database error: database is locked" })
        );
    }

    #[test]
    fn test_not_found_body_is_verbatim() {
        let error = AppError::not_found("Customer not found");
        assert_eq!(error.response_body(), json!({ "error": "Customer not found" }));
        assert_eq!(error.http_status(), 404);
    }

    #[test]
    fn test_display_includes_description() {
        let error = AppError::invalid_input("bad body");
        assert_eq!(error.to_string(), "The provided input is invalid: bad body");
    }
}
