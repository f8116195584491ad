//! Comment wire models

use chrono::{DateTime, Utc};
use feed_core::{EntityId, MAX_COMMENT_LEN};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::UserModel;

/// Comment as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentModel {
    pub id: EntityId,
    pub post_id: EntityId,
    pub user: UserModel,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `PATCH /comments/{id}`
///
/// Same bounds as a new comment.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCommentBody {
    #[validate(length(min = 1, max = MAX_COMMENT_LEN, message = "Comment must not be empty or too long"))]
    pub content: String,
}

impl UpdateCommentBody {
    /// Body with surrounding whitespace trimmed
    pub fn new(content: &str) -> Self {
        Self {
            content: content.trim().to_string(),
        }
    }
}
