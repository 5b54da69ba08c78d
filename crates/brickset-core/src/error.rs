//! Error types for the brickset library.
//!
//! This module provides a unified error type with explicit variants for
//! transport, authentication, API, and input validation errors.

use std::fmt;
use thiserror::Error;

/// The unified error type for brickset operations.
///
/// This error type covers all possible failure modes in the library,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors (rejected credentials or user token).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Errors reported by the BrickSet API, either as an HTTP status or
    /// in-band through the response envelope.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Response body that does not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Input validation errors (invalid set number, API URL).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login was rejected by the API.
    #[error("login rejected: {0}")]
    LoginRejected(String),

    /// A user token failed validation.
    #[error("user token rejected: {0}")]
    TokenRejected(String),
}

/// An error reported by the BrickSet API.
///
/// BrickSet reports most failures in-band: an HTTP 200 response whose
/// envelope carries `"status": "error"` and a message. Both those and
/// plain non-2xx statuses end up here.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code of the response.
    pub status: u16,
    /// Error message from the server, if present.
    pub message: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }

    /// Check if this error points at a bad API key or user token.
    pub fn is_auth_error(&self) -> bool {
        if self.status == 401 || self.status == 403 {
            return true;
        }
        self.message
            .as_deref()
            .is_some_and(|m| {
                let m = m.to_ascii_lowercase();
                m.contains("api key") || m.contains("user hash")
            })
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid set number format.
    #[error("invalid set number '{value}': {reason}")]
    SetNumber { value: String, reason: String },

    /// Invalid API URL format.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display() {
        let err = ApiError::new(200, Some("Invalid API key".to_string()));
        assert_eq!(err.to_string(), "HTTP 200: Invalid API key");

        let err = ApiError::new(503, None);
        assert_eq!(err.to_string(), "HTTP 503");
    }

    #[test]
    fn api_error_auth_detection() {
        assert!(ApiError::new(401, None).is_auth_error());
        assert!(ApiError::new(200, Some("Invalid API key".into())).is_auth_error());
        assert!(ApiError::new(200, Some("Invalid user hash".into())).is_auth_error());
        assert!(!ApiError::new(200, Some("Parameter error".into())).is_auth_error());
        assert!(!ApiError::new(500, None).is_auth_error());
    }
}
