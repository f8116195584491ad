//! Application state held by the store

use feed_core::{Actor, Filters};

/// Global application state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    /// Current feed filters
    pub filters: Filters,
    /// Bumped on every filter replacement, even when the value is unchanged
    pub filters_revision: u64,
    /// Who is currently acting
    pub auth: Actor,
}

impl AppState {
    /// Initial state with the given filters and an anonymous actor
    pub fn with_filters(filters: Filters) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }
}
