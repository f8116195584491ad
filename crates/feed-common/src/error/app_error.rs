//! Application error types
//!
//! Unified error handling for code that wires the feed together.

use feed_core::DomainError;
use std::fmt;

use crate::config::ConfigError;

/// Result type for application code
pub type AppResult<T> = Result<T, AppError>;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Collaborator errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    // Client construction errors
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    // Background task errors
    #[error("Feed controller stopped")]
    ControllerStopped,

    // Internal errors
    #[error("Internal error")]
    Internal(#[source] anyhow::Error),
}

impl AppError {
    /// Get error code for logs
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::Config(_) => "CONFIG_ERROR",
            Self::HttpClient(_) => "HTTP_CLIENT_ERROR",
            Self::ControllerStopped => "CONTROLLER_STOPPED",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Check whether the failed operation may be retried as-is
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Domain(e) => e.is_retryable(),
            _ => false,
        }
    }

    /// Create an HTTP client error
    #[must_use]
    pub fn http_client(msg: impl fmt::Display) -> Self {
        Self::HttpClient(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}
