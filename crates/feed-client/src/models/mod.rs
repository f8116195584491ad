//! Wire models - JSON shapes exchanged with the remote API

mod comment;
mod envelope;
mod post;
mod user;

pub use comment::{CommentModel, UpdateCommentBody};
pub use envelope::{DataResponse, ErrorBody, ListResponse, PaginationModel};
pub use post::{ClapModel, PostModel};
pub use user::{ImageModel, UserModel};
