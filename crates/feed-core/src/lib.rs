//! # feed-core
//!
//! Domain layer containing entities, value objects, collaborator traits, and the domain error.
//! This crate has zero dependencies on infrastructure (HTTP client, runtime, view layer).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Actor, Clap, Comment, Image, Page, Post, User};
pub use error::{DomainError, DomainResult};
pub use traits::{AuthContext, CommentRepository, NewComment, PostSource, MAX_COMMENT_LEN};
pub use value_objects::{Cursor, EntityId, EntityIdParseError, Filters, SortOrder};
