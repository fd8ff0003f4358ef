//! Error types for ayah-audio
//!
//! This module provides error handling for the library, including:
//! - Domain error types (configuration, validation, upstream failures)
//! - HTTP status code mapping for API integration
//! - Structured error responses with machine-readable error codes
//!
//! The audio resolution subsystem itself never returns an error: probing
//! swallows transport failures and resolution always degrades to a
//! best-effort URL. The variants here cover everything around it: the
//! boundary, the text proxy, and startup.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Result type alias for ayah-audio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for ayah-audio
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "audio.primary_host")
        key: Option<String>,
    },

    /// Request validation failed at the HTTP boundary
    #[error("validation error: {message}")]
    Validation {
        /// Human-readable description of the invalid field
        message: String,
        /// The request field that failed validation
        field: Option<String>,
    },

    /// Upstream returned a non-success status for a passthrough request
    #[error("upstream returned status {status} for {url}")]
    Upstream {
        /// The upstream URL that was requested
        url: String,
        /// The HTTP status the upstream returned
        status: u16,
    },

    /// Network error talking to an upstream
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// API server error
    #[error("API server error: {0}")]
    ApiServer(String),
}

/// Structured API error response
///
/// Serialized as the JSON body of every non-2xx response:
///
/// ```json
/// {
///   "error": {
///     "code": "validation_error",
///     "message": "surah must be between 1 and 114",
///     "details": { "field": "surah" }
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// The error details
    pub error: ErrorDetail,
}

/// Detailed error information for API responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "validation_error", "upstream_error")
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional context about the error
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Create a new API error with code and message
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                details: None,
            },
        }
    }

    /// Create an API error with additional details
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                details: Some(details),
            },
        }
    }
}

/// Convert errors to HTTP status codes for API responses
pub trait ToHttpStatus {
    /// Get the HTTP status code for this error
    fn status_code(&self) -> u16;

    /// Get the machine-readable error code
    fn error_code(&self) -> &str;
}

impl ToHttpStatus for Error {
    fn status_code(&self) -> u16 {
        match self {
            // 422 Unprocessable Entity - semantically invalid input
            Error::Validation { .. } => 422,

            // 502 Bad Gateway - external service errors
            Error::Upstream { .. } => 502,
            Error::Network(_) => 502,

            // 500 Internal Server Error - server-side issues
            Error::Config { .. } => 500,
            Error::Serialization(_) => 500,
            Error::Io(_) => 500,
            Error::ApiServer(_) => 500,
        }
    }

    fn error_code(&self) -> &str {
        match self {
            Error::Config { .. } => "config_error",
            Error::Validation { .. } => "validation_error",
            Error::Upstream { .. } => "upstream_error",
            Error::Network(_) => "upstream_unreachable",
            Error::Serialization(_) => "serialization_error",
            Error::Io(_) => "io_error",
            Error::ApiServer(_) => "api_server_error",
        }
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        let code = error.error_code().to_string();
        let message = error.to_string();

        // Add contextual details for specific error types
        let details = match &error {
            Error::Config { key: Some(key), .. } => Some(serde_json::json!({
                "key": key,
            })),
            Error::Validation {
                field: Some(field), ..
            } => Some(serde_json::json!({
                "field": field,
            })),
            Error::Upstream { url, status } => Some(serde_json::json!({
                "url": url,
                "status": status,
            })),
            _ => None,
        };

        Self {
            error: ErrorDetail {
                code,
                message,
                details,
            },
        }
    }
}
