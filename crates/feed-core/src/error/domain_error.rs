//! Domain errors - failures a collaborator can report to the feed core

use thiserror::Error;

use crate::value_objects::EntityId;

/// Result type for collaborator operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain layer errors
///
/// An empty page is not an error, and a response superseded by newer filters
/// is dropped silently by the controller; neither has a variant here.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    // =========================================================================
    // Transport Errors
    // =========================================================================
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Could not read server response: {0}")]
    Decode(String),

    // =========================================================================
    // Request Errors
    // =========================================================================
    #[error("Request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Comment not found: {0}")]
    CommentNotFound(EntityId),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    // =========================================================================
    // Internal Errors
    // =========================================================================
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Get an error code string for logs and display
    pub fn code(&self) -> &'static str {
        match self {
            Self::Network(_) => "NETWORK_ERROR",
            Self::Timeout => "TIMEOUT",
            Self::Server { .. } => "SERVER_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::Rejected { .. } => "REQUEST_REJECTED",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Check whether repeating the same request may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Timeout | Self::Server { .. } | Self::Decode(_)
        )
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CommentNotFound(_) | Self::NotFound(_))
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .filter_map(|e| e.message.as_ref().map(ToString::to_string))
            .next()
            .unwrap_or_else(|| errors.to_string());
        Self::Validation(message)
    }
}
