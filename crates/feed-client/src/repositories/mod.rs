//! HTTP implementations of the feed-core collaborator traits

mod comment;
mod post;

pub use comment::HttpCommentRepository;
pub use post::{HttpPostSource, PostQuery};
