// src/error.rs

//! Unified error handling for the storefront data layer.

use std::time::Duration;

use thiserror::Error;

use crate::api::Endpoint;

/// Result type alias for storefront operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Backend answered with a non-success status
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: Endpoint, status: u16 },

    /// Read did not settle before its deadline
    #[error("{endpoint} timed out after {after:?}")]
    Timeout { endpoint: Endpoint, after: Duration },

    /// Read was abandoned because its owner was torn down
    #[error("{0} cancelled")]
    Cancelled(Endpoint),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a non-success status error.
    pub fn status(endpoint: Endpoint, status: u16) -> Self {
        Self::Status { endpoint, status }
    }

    /// True when the error only means the owner went away.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }
}
