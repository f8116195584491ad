//! Comment item workflow

mod item;

pub use item::{CommentItem, CommentItemFlags, ReloadCallback, SubmitMode};
