//! Collaborator traits (ports) - the narrow interfaces the feed core talks through
//!
//! The domain layer defines what it needs from the remote API and the auth
//! context; the client and view layers provide the implementations.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use validator::Validate;

use crate::entities::{Actor, Comment, Page};
use crate::error::DomainResult;
use crate::value_objects::{Cursor, EntityId, Filters};

// ============================================================================
// Post Listing
// ============================================================================

/// Producer of post pages
///
/// Repeated calls with the same `(filters, cursor)` are expected to be idempotent.
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Fetch the page starting at `cursor` (`None` for the first page)
    async fn fetch_page(&self, filters: &Filters, cursor: Option<&Cursor>) -> DomainResult<Page>;
}

#[async_trait]
impl<T: PostSource + ?Sized> PostSource for Arc<T> {
    async fn fetch_page(&self, filters: &Filters, cursor: Option<&Cursor>) -> DomainResult<Page> {
        (**self).fetch_page(filters, cursor).await
    }
}

// ============================================================================
// Comment Mutations
// ============================================================================

/// Longest comment body the API accepts
pub const MAX_COMMENT_LEN: u64 = 5000;

/// Body of a new comment or reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct NewComment {
    #[serde(skip)]
    pub post_id: EntityId,

    #[validate(length(min = 1, max = MAX_COMMENT_LEN, message = "Comment must not be empty or too long"))]
    pub content: String,

    /// Comment being replied to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<EntityId>,
}

impl NewComment {
    pub fn new(post_id: EntityId, content: impl Into<String>) -> Self {
        Self {
            post_id,
            content: content.into().trim().to_string(),
            reply_to: None,
        }
    }

    pub fn reply(post_id: EntityId, reply_to: EntityId, content: impl Into<String>) -> Self {
        Self {
            reply_to: Some(reply_to),
            ..Self::new(post_id, content)
        }
    }
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// List comments of a post, oldest first
    async fn list_by_post(&self, post_id: EntityId) -> DomainResult<Vec<Comment>>;

    /// Create a comment or reply
    async fn create(&self, comment: &NewComment) -> DomainResult<Comment>;

    /// Replace the content of an existing comment
    async fn update(&self, id: EntityId, content: &str) -> DomainResult<Comment>;

    /// Delete a comment
    async fn delete(&self, id: EntityId) -> DomainResult<()>;
}

#[async_trait]
impl<T: CommentRepository + ?Sized> CommentRepository for Arc<T> {
    async fn list_by_post(&self, post_id: EntityId) -> DomainResult<Vec<Comment>> {
        (**self).list_by_post(post_id).await
    }

    async fn create(&self, comment: &NewComment) -> DomainResult<Comment> {
        (**self).create(comment).await
    }

    async fn update(&self, id: EntityId, content: &str) -> DomainResult<Comment> {
        (**self).update(id, content).await
    }

    async fn delete(&self, id: EntityId) -> DomainResult<()> {
        (**self).delete(id).await
    }
}

// ============================================================================
// Auth Context
// ============================================================================

/// Read-only view of who is currently acting
pub trait AuthContext: Send + Sync {
    fn current_actor(&self) -> Actor;

    fn is_authenticated(&self) -> bool {
        self.current_actor().is_authenticated()
    }
}

impl<T: AuthContext + ?Sized> AuthContext for Arc<T> {
    fn current_actor(&self) -> Actor {
        (**self).current_actor()
    }
}
