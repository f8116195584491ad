//! Actions and the reducer that applies them

use feed_core::{Actor, Filters, SortOrder};

use super::AppState;

/// Every way the application state can change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the whole filter object
    MutateFilters(Filters),
    /// Replace the search text, keeping the sort order
    SetSearch(String),
    /// Drop the search text, keeping the sort order
    ClearSearch,
    /// Replace the sort order, keeping the search text
    SetSort(SortOrder),
    /// An actor signed in
    SignedIn(Actor),
    /// The current actor signed out
    SignedOut,
}

impl Action {
    /// Check whether applying this action restarts the feed
    pub fn touches_filters(&self) -> bool {
        matches!(
            self,
            Self::MutateFilters(_) | Self::SetSearch(_) | Self::ClearSearch | Self::SetSort(_)
        )
    }
}

/// Apply an action to a state, producing the next state
///
/// The convenience actions merge into the current filters first and then
/// replace them whole, exactly like `MutateFilters`.
pub fn reduce(state: &AppState, action: Action) -> AppState {
    let replace_filters = |filters: Filters| AppState {
        filters,
        filters_revision: state.filters_revision.wrapping_add(1),
        auth: state.auth.clone(),
    };

    match action {
        Action::MutateFilters(filters) => replace_filters(filters),
        Action::SetSearch(search) => replace_filters(state.filters.with_search(search)),
        Action::ClearSearch => replace_filters(state.filters.with_search("")),
        Action::SetSort(sort) => replace_filters(state.filters.with_sort(sort)),
        Action::SignedIn(actor) => AppState {
            auth: actor,
            ..state.clone()
        },
        Action::SignedOut => AppState {
            auth: Actor::anonymous(),
            ..state.clone()
        },
    }
}
