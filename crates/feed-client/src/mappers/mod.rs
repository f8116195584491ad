//! Model → entity mappers

mod comment;
mod post;
mod user;

pub use post::page_from_listing;
