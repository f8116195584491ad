//! Feed state machine
//!
//! Pure, synchronous transitions of the paginated feed. The async driver in
//! `controller.rs` owns one `FeedState`, turns the `PageRequest`s it hands out
//! into fetches, and feeds every result back through `apply`.

use feed_common::{ErrorMessage, ErrorTransformer};
use feed_core::{Cursor, DomainResult, Filters, Page, Post};

/// Which page a request is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    FirstPage,
    NextPage,
}

/// Lifecycle of the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedStatus {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading(FetchKind),
    Success,
    Error(FetchKind),
}

/// A fetch the driver must perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Tag used to recognize the result; older generations are discarded
    pub generation: u64,
    pub filters: Filters,
    /// `None` for the first page
    pub cursor: Option<Cursor>,
    pub kind: FetchKind,
}

/// Pagination flags consumed by the list renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pagination {
    pub has_next_page: bool,
    pub is_loading: bool,
    pub is_error: bool,
}

/// Read-only picture of the feed published to observers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedSnapshot {
    /// Filters the posts were fetched for
    pub filters: Filters,
    pub posts: Vec<Post>,
    pub has_next_page: bool,
    pub status: FeedStatus,
    /// Transformed message of the last failure, present only in `Error`
    pub error: Option<ErrorMessage>,
    /// Total matching posts as last reported by the server
    pub total: Option<u64>,
}

impl FeedSnapshot {
    #[inline]
    pub fn is_loading(&self) -> bool {
        matches!(self.status, FeedStatus::Loading(_))
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self.status, FeedStatus::Error(_))
    }

    /// True when the failure happened before any page arrived
    pub fn is_first_page_error(&self) -> bool {
        self.status == FeedStatus::Error(FetchKind::FirstPage)
    }

    pub fn pagination(&self) -> Pagination {
        Pagination {
            has_next_page: self.has_next_page,
            is_loading: self.is_loading(),
            is_error: self.is_error(),
        }
    }
}

/// Accumulated posts, cursor, and status of one feed
#[derive(Debug, Clone, Default)]
pub struct FeedState {
    filters: Filters,
    posts: Vec<Post>,
    next_cursor: Option<Cursor>,
    has_next_page: bool,
    status: FeedStatus,
    error: Option<ErrorMessage>,
    total: Option<u64>,
    generation: u64,
    in_flight: Option<u64>,
}

impl FeedState {
    /// Idle feed for `filters`; nothing is requested until `restart`
    pub fn new(filters: Filters) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn status(&self) -> FeedStatus {
        self.status
    }

    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    pub fn next_cursor(&self) -> Option<&Cursor> {
        self.next_cursor.as_ref()
    }

    /// Generation of the request whose result will be accepted, if any
    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, FeedStatus::Loading(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self.status, FeedStatus::Error(_))
    }

    /// Drop everything and load the first page for `filters`
    ///
    /// Any request still in flight becomes stale.
    pub fn restart(&mut self, filters: Filters) -> PageRequest {
        self.filters = filters;
        self.posts.clear();
        self.next_cursor = None;
        self.has_next_page = false;
        self.total = None;
        self.error = None;
        self.request(FetchKind::FirstPage, None)
    }

    /// The sentinel became visible
    ///
    /// Returns a request only when another page exists and the feed is
    /// neither loading nor showing an error.
    pub fn near_end(&mut self) -> Option<PageRequest> {
        if !self.has_next_page || self.is_loading() || self.is_error() {
            return None;
        }
        let cursor = self.next_cursor.clone()?;
        Some(self.request(FetchKind::NextPage, Some(cursor)))
    }

    /// Full reset with the current filters
    pub fn refetch(&mut self) -> PageRequest {
        let filters = self.filters.clone();
        self.restart(filters)
    }

    /// Repeat the request that failed
    ///
    /// A failed next page is asked for again with the same cursor and the
    /// posts stay; in every other case this is `refetch`.
    pub fn retry(&mut self) -> PageRequest {
        match (self.status, self.next_cursor.clone()) {
            (FeedStatus::Error(FetchKind::NextPage), Some(cursor)) => {
                self.error = None;
                self.request(FetchKind::NextPage, Some(cursor))
            }
            _ => self.refetch(),
        }
    }

    fn request(&mut self, kind: FetchKind, cursor: Option<Cursor>) -> PageRequest {
        self.generation = self.generation.wrapping_add(1);
        self.in_flight = Some(self.generation);
        self.status = FeedStatus::Loading(kind);
        PageRequest {
            generation: self.generation,
            filters: self.filters.clone(),
            cursor,
            kind,
        }
    }

    /// Apply the result of a fetch
    ///
    /// Returns `false` and leaves the state untouched when `generation` is not
    /// the request currently in flight.
    pub fn apply(
        &mut self,
        generation: u64,
        result: DomainResult<Page>,
        transformer: &dyn ErrorTransformer,
    ) -> bool {
        if self.in_flight != Some(generation) {
            tracing::debug!(
                generation,
                current = ?self.in_flight,
                "Discarding stale page response"
            );
            return false;
        }
        self.in_flight = None;

        let kind = match self.status {
            FeedStatus::Loading(kind) => kind,
            _ => FetchKind::FirstPage,
        };

        match result {
            Ok(page) => {
                tracing::debug!(
                    generation,
                    page_len = page.items.len(),
                    has_next_page = page.has_next_page(),
                    "Page received"
                );
                if kind == FetchKind::FirstPage || page.total.is_some() {
                    self.total = page.total;
                }
                self.posts.extend(page.items);
                self.has_next_page = page.next_cursor.is_some();
                self.next_cursor = page.next_cursor;
                self.error = None;
                self.status = FeedStatus::Success;
            }
            Err(e) => {
                tracing::warn!(generation, error = %e, code = e.code(), "Page request failed");
                self.error = Some(transformer.transform(&e));
                self.status = FeedStatus::Error(kind);
            }
        }
        true
    }

    /// Copy of the observable state
    pub fn snapshot(&self) -> FeedSnapshot {
        FeedSnapshot {
            filters: self.filters.clone(),
            posts: self.posts.clone(),
            has_next_page: self.has_next_page,
            status: self.status,
            error: self.error.clone(),
            total: self.total,
        }
    }
}
