//! Comment model -> entity mapper

use feed_core::entities::{Comment, User};

use crate::models::CommentModel;

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            post_id: model.post_id,
            user: User::from(model.user),
            content: model.content,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
