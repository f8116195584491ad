//! Collaborator traits (ports) implemented outside the domain layer

mod collaborators;

pub use collaborators::{AuthContext, CommentRepository, NewComment, PostSource, MAX_COMMENT_LEN};
