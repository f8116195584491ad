//! Page cursor - opaque continuation token returned by the post listing

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque cursor pointing at the next page of a listing
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Wrap a raw cursor value
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the raw value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Treat blank server cursors as "no next page"
    pub fn non_empty(value: Option<String>) -> Option<Self> {
        value
            .filter(|v| !v.trim().is_empty())
            .map(Self)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
