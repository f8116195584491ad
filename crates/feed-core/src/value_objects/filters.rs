//! Feed filters - the search text and sort order the feed is listed by

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Maximum accepted length of the search text
pub const MAX_SEARCH_LEN: u64 = 200;

/// Sort order of the post listing
///
/// The set is fixed; the server only understands these wire values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    Popular,
    MostCommented,
}

impl SortOrder {
    /// Every option, in the order the sort selector shows them
    pub const ALL: [SortOrder; 4] = [
        SortOrder::Newest,
        SortOrder::Oldest,
        SortOrder::Popular,
        SortOrder::MostCommented,
    ];

    /// Value sent in the `sort` query parameter
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Popular => "popular",
            Self::MostCommented => "most_commented",
        }
    }

    /// Human readable label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::Oldest => "Oldest",
            Self::Popular => "Popular",
            Self::MostCommented => "Most commented",
        }
    }

    /// Parse a wire value (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|option| option.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current feed filters
///
/// An empty `search` means no text filter is applied. Filters are always
/// replaced as a whole; callers merge before handing a new value over.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate)]
pub struct Filters {
    #[validate(length(max = MAX_SEARCH_LEN, message = "Search text is too long"))]
    #[serde(default)]
    pub search: String,

    #[serde(default)]
    pub sort: SortOrder,
}

impl Filters {
    /// Create filters, trimming surrounding whitespace from the search text
    pub fn new(search: impl Into<String>, sort: SortOrder) -> Self {
        Self {
            search: search.into().trim().to_string(),
            sort,
        }
    }

    /// Copy with a different search text
    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self::new(search, self.sort)
    }

    /// Copy with a different sort order
    pub fn with_sort(&self, sort: SortOrder) -> Self {
        Self {
            search: self.search.clone(),
            sort,
        }
    }

    /// Check whether a text filter is applied
    #[inline]
    pub fn has_search(&self) -> bool {
        !self.search.is_empty()
    }
}
