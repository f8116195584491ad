//! # feed-view
//!
//! Application layer of the community feed: the injectable state store, the
//! paginated feed controller, comment item state, and the pure projection of
//! all of it into a renderer-agnostic view tree.

pub mod comment;
pub mod feed;
pub mod render;
pub mod store;

// Re-export commonly used types at crate root
pub use comment::{CommentItem, CommentItemFlags, ReloadCallback, SubmitMode};
pub use feed::{
    FeedCommand, FeedController, FeedHandle, FeedSnapshot, FeedState, FeedStatus, FetchKind,
    PageRequest, Pagination, SentinelTrigger,
};
pub use render::{render_comment, render_feed, render_post_card, View};
pub use store::{reduce, Action, AppState, Store};
