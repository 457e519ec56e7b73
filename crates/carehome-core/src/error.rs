//! Error types for the carehome client.
//!
//! This module provides a unified error type with explicit variants for
//! transport, rejection, parsing, storage, and input validation errors.

use std::fmt;
use thiserror::Error;

/// The unified error type for carehome operations.
///
/// Every failure of a login attempt or a token write maps onto exactly one
/// variant, so callers can match on the failure mode rather than on text.
#[derive(Debug, Error)]
pub enum Error {
    /// No response was obtained from the token service.
    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    /// The token service answered with a non-success status.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(#[from] Rejection),

    /// The token service answered with success but the body was unusable.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The token could not be written to local storage.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Input validation errors (invalid API URL).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Human-readable text for display on a login screen.
    pub fn user_message(&self) -> String {
        match self {
            Error::Network(err) => format!("Network error: {}", err.message()),
            Error::InvalidCredentials(rejection) => match rejection.detail.as_deref() {
                Some(detail) => format!("Invalid credentials: {}", detail),
                None => "Invalid credentials".to_string(),
            },
            Error::Parse(_) => "Unexpected response from server".to_string(),
            Error::Storage(err) => format!("Could not save token: {}", err),
            Error::InvalidInput(err) => err.to_string(),
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Any other failure before a response arrived.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl NetworkError {
    /// Returns the underlying error description.
    pub fn message(&self) -> &str {
        match self {
            NetworkError::Connection { message }
            | NetworkError::Timeout { message }
            | NetworkError::Http { message } => message,
        }
    }
}

/// A non-success response from the token service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// HTTP status code.
    pub status: u16,
    /// Server-supplied reason, if the body carried one.
    pub detail: Option<String>,
}

impl Rejection {
    /// Create a new rejection.
    pub fn new(status: u16, detail: Option<String>) -> Self {
        Self { status, detail }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref detail) = self.detail {
            write!(f, ": {}", detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for Rejection {}

/// Errors decoding a successful token response.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The body was not valid JSON.
    #[error("response body is not valid JSON: {message}")]
    InvalidJson { message: String },

    /// The body was JSON but had no string `access` field.
    #[error("response has no string field '{field}'")]
    MissingField { field: &'static str },
}

/// Token persistence errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The OS credential store refused the operation.
    #[error("keyring: {message}")]
    Keyring { message: String },

    /// Filesystem I/O failed.
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// No location is available for the store.
    #[error("no storage location: {message}")]
    Unavailable { message: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API URL format.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_display_includes_status_and_detail() {
        let rejection = Rejection::new(401, Some("No active account".to_string()));
        assert_eq!(rejection.to_string(), "HTTP 401: No active account");
        assert_eq!(Rejection::new(503, None).to_string(), "HTTP 503");
    }

    #[test]
    fn user_message_for_rejection_without_detail() {
        let err = Error::from(Rejection::new(401, None));
        assert_eq!(err.user_message(), "Invalid credentials");
    }

    #[test]
    fn user_message_for_network_carries_description() {
        let err = Error::from(NetworkError::Connection {
            message: "connection refused".to_string(),
        });
        assert_eq!(err.user_message(), "Network error: connection refused");
    }
}
