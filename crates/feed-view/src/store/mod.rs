//! Application state store - filters and auth, mutated only by dispatched actions

mod action;
mod state;
mod store;

pub use action::{reduce, Action};
pub use state::AppState;
pub use store::Store;
