//! Value objects - immutable types defined by their values

mod cursor;
mod filters;
mod id;

pub use cursor::Cursor;
pub use filters::{Filters, SortOrder, MAX_SEARCH_LEN};
pub use id::{EntityId, EntityIdParseError};
