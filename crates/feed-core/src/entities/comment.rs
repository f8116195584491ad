//! Comment entity - a comment left on a post

use chrono::{DateTime, Utc};

use super::User;
use crate::value_objects::EntityId;

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: EntityId,
    pub post_id: EntityId,
    pub user: User,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new, never edited comment
    pub fn new(
        id: EntityId,
        post_id: EntityId,
        user: User,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            post_id,
            user,
            content: content.into(),
            created_at,
            updated_at: created_at,
        }
    }

    /// A comment counts as edited once its timestamps diverge
    #[inline]
    pub fn is_edited(&self) -> bool {
        self.updated_at != self.created_at
    }
}
