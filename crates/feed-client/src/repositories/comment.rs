//! HTTP implementation of CommentRepository

use async_trait::async_trait;
use reqwest::Method;
use tracing::{info, instrument};
use validator::Validate;

use feed_core::entities::Comment;
use feed_core::traits::{CommentRepository, NewComment};
use feed_core::{DomainError, DomainResult, EntityId};

use crate::client::ApiClient;
use crate::models::{CommentModel, DataResponse, ListResponse, UpdateCommentBody};

/// Comment endpoints of the remote API
#[derive(Clone)]
pub struct HttpCommentRepository {
    client: ApiClient,
}

impl HttpCommentRepository {
    /// Create a new HttpCommentRepository
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

/// A 404 on a comment route means that comment is gone
fn comment_not_found(id: EntityId) -> impl FnOnce(DomainError) -> DomainError {
    move |e| match e {
        DomainError::NotFound(_) => DomainError::CommentNotFound(id),
        other => other,
    }
}

#[async_trait]
impl CommentRepository for HttpCommentRepository {
    #[instrument(skip(self))]
    async fn list_by_post(&self, post_id: EntityId) -> DomainResult<Vec<Comment>> {
        let no_query: [(&str, &str); 0] = [];
        let response: ListResponse<CommentModel> = self
            .client
            .get_json(&format!("posts/{post_id}/comments"), &no_query)
            .await?;

        Ok(response.data.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self, comment), fields(post_id = %comment.post_id))]
    async fn create(&self, comment: &NewComment) -> DomainResult<Comment> {
        comment.validate()?;

        let response: DataResponse<CommentModel> = self
            .client
            .send_json(
                Method::POST,
                &format!("posts/{}/comments", comment.post_id),
                comment,
            )
            .await?;

        let created = Comment::from(response.data);
        info!(comment_id = %created.id, "Comment created");
        Ok(created)
    }

    #[instrument(skip(self, content))]
    async fn update(&self, id: EntityId, content: &str) -> DomainResult<Comment> {
        let body = UpdateCommentBody::new(content);
        body.validate()?;

        let response: DataResponse<CommentModel> = self
            .client
            .send_json(Method::PATCH, &format!("comments/{id}"), &body)
            .await
            .map_err(comment_not_found(id))?;

        info!(comment_id = %id, "Comment updated");
        Ok(Comment::from(response.data))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: EntityId) -> DomainResult<()> {
        self.client
            .delete(&format!("comments/{id}"))
            .await
            .map_err(comment_not_found(id))?;

        info!(comment_id = %id, "Comment deleted");
        Ok(())
    }
}
