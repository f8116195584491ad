//! Response envelopes shared by every endpoint

use serde::{Deserialize, Serialize};

/// Single-item response: `{ "data": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// List response with optional cursor pagination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<PaginationModel>,
}

/// Pagination metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationModel {
    /// Cursor for fetching the next page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    /// Whether more results exist
    #[serde(default)]
    pub has_more: bool,
    /// Total number of matching items, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

/// Error body sent with non-2xx responses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}
