//! Error transformer - turns collaborator failures into text a user can read

use feed_core::DomainError;
use serde::Serialize;
use std::fmt;

/// User-displayable error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Maps a raw failure into a displayable message
pub trait ErrorTransformer: Send + Sync {
    fn transform(&self, error: &DomainError) -> ErrorMessage;
}

impl<F> ErrorTransformer for F
where
    F: Fn(&DomainError) -> ErrorMessage + Send + Sync,
{
    fn transform(&self, error: &DomainError) -> ErrorMessage {
        self(error)
    }
}

/// Transformer used when the application does not supply its own
///
/// Server-provided messages are passed through; transport failures get a
/// generic sentence.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultErrorTransformer;

impl ErrorTransformer for DefaultErrorTransformer {
    fn transform(&self, error: &DomainError) -> ErrorMessage {
        let message = match error {
            DomainError::Network(_) => {
                "Unable to reach the server. Check your connection and try again.".to_string()
            }
            DomainError::Timeout => "The server took too long to respond.".to_string(),
            DomainError::Decode(_) => "The server sent a response we could not read.".to_string(),
            DomainError::Server { message, .. } | DomainError::Rejected { message, .. }
                if !message.trim().is_empty() =>
            {
                message.clone()
            }
            DomainError::Server { .. } => "Something went wrong on our side.".to_string(),
            DomainError::Rejected { .. } => "The request was rejected.".to_string(),
            DomainError::Unauthenticated => "You need to sign in to do that.".to_string(),
            DomainError::CommentNotFound(_) => "This comment no longer exists.".to_string(),
            DomainError::NotFound(_) => "The requested content could not be found.".to_string(),
            DomainError::Validation(msg) => msg.clone(),
            DomainError::Internal(_) => "Something went wrong.".to_string(),
        };
        ErrorMessage { message }
    }
}
