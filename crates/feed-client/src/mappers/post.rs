//! Post and Clap model -> entity mapper

use feed_core::entities::{Clap, Comment, Image, Page, Post, User};
use feed_core::Cursor;
use tracing::warn;

use crate::models::{ClapModel, ListResponse, PostModel};

/// Convert ClapModel to Clap entity
impl From<ClapModel> for Clap {
    fn from(model: ClapModel) -> Self {
        Clap {
            id: model.id,
            user_id: model.user_id,
            post_id: model.post_id,
            created_at: model.created_at,
        }
    }
}

/// Convert PostModel to Post entity
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        let post = Post {
            id: model.id,
            slug: model.slug,
            title: model.title,
            cover_image: model
                .cover_image
                .filter(|img| !img.url.trim().is_empty())
                .map(Image::from),
            user: User::from(model.user),
            tags: Vec::new(),
            comments: model.comments.into_iter().map(Comment::from).collect(),
            claps: model.claps.into_iter().map(Clap::from).collect(),
            visits: model.visits,
            words: model.words,
            read_time: model.read_time,
            created_at: model.created_at,
            updated_at: model.updated_at,
        };
        post.with_tags(model.tags)
    }
}

/// Convert a listing response into a page
///
/// `has_more == false` ends the listing even if the server also sent a cursor;
/// `has_more == true` without a usable cursor ends it too, since there is
/// nothing to continue from.
pub fn page_from_listing(response: ListResponse<PostModel>) -> Page {
    let pagination = response.pagination.unwrap_or_default();

    let next_cursor = if pagination.has_more {
        let cursor = Cursor::non_empty(pagination.next_cursor);
        if cursor.is_none() {
            warn!("Listing reports more results but sent no cursor");
        }
        cursor
    } else {
        None
    };

    Page {
        items: response.data.into_iter().map(Post::from).collect(),
        next_cursor,
        total: pagination.total,
    }
}
