//! Store - injectable container for the application state
//!
//! One writer at a time applies actions through the reducer; any number of
//! readers observe every published state through a watch channel.

use std::sync::Arc;

use feed_core::traits::AuthContext;
use feed_core::{Actor, Filters};
use tokio::sync::watch;
use tracing::debug;

use super::{reduce, Action, AppState};

/// Shared handle to the application state
///
/// Cloning is cheap; every clone reads and writes the same state.
#[derive(Clone)]
pub struct Store {
    state: Arc<watch::Sender<AppState>>,
}

impl Store {
    /// Create a store holding `initial`
    pub fn new(initial: AppState) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            state: Arc::new(tx),
        }
    }

    /// Create a store with the given filters and an anonymous actor
    pub fn with_filters(filters: Filters) -> Self {
        Self::new(AppState::with_filters(filters))
    }

    /// Snapshot of the current state
    pub fn state(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// Current filters
    pub fn filters(&self) -> Filters {
        self.state.borrow().filters.clone()
    }

    /// Apply an action and notify every subscriber
    pub fn dispatch(&self, action: Action) {
        debug!(?action, restarts_feed = action.touches_filters(), "Dispatching action");
        self.state.send_modify(|state| {
            *state = reduce(state, action);
        });
    }

    /// Replace the entire filter object
    ///
    /// Every call restarts the feed from its first page.
    pub fn set_filters(&self, next: Filters) {
        self.dispatch(Action::MutateFilters(next));
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl AuthContext for Store {
    fn current_actor(&self) -> Actor {
        self.state.borrow().auth.clone()
    }
}
