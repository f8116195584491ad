//! Domain entities - objects fetched from the remote API

mod comment;
mod post;
mod user;

pub use comment::Comment;
pub use post::{Clap, Page, Post};
pub use user::{Actor, Image, User};
