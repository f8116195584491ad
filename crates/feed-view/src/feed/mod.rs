//! Paginated feed
//!
//! `FeedState` holds the pure transitions; `FeedController` drives them from
//! a tokio task and publishes `FeedSnapshot`s.

mod controller;
mod state;

pub use controller::{FeedCommand, FeedController, FeedHandle, SentinelTrigger};
pub use state::{FeedSnapshot, FeedState, FeedStatus, FetchKind, PageRequest, Pagination};
