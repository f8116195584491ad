//! Pure projections of feed and comment state into a view tree

mod comment;
mod feed_list;
mod format;
mod post_card;
mod view;

pub use comment::render_comment;
pub use feed_list::render_feed;
pub use format::format_date;
pub use post_card::render_post_card;
pub use view::{Button, Icon, ListItem, SelectOption, Severity, TextStyle, UiAction, View};
