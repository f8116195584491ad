//! HTTP implementation of PostSource

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, instrument};
use validator::Validate;

use feed_core::entities::Page;
use feed_core::traits::PostSource;
use feed_core::{Cursor, DomainResult, Filters};

use crate::client::ApiClient;
use crate::mappers::page_from_listing;
use crate::models::{ListResponse, PostModel};

/// Query string of `GET /posts`
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PostQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<&'a str>,
    pub sort: &'static str,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<&'a str>,
}

impl<'a> PostQuery<'a> {
    /// Build the query for one page; an empty search is left out entirely
    pub fn new(filters: &'a Filters, cursor: Option<&'a Cursor>, limit: u32) -> Self {
        Self {
            search: filters.has_search().then_some(filters.search.as_str()),
            sort: filters.sort.as_str(),
            limit,
            cursor: cursor.map(Cursor::as_str),
        }
    }
}

/// Post listing backed by the remote API
#[derive(Clone)]
pub struct HttpPostSource {
    client: ApiClient,
    page_size: u32,
}

impl HttpPostSource {
    /// Create a new HttpPostSource
    pub fn new(client: ApiClient, page_size: u32) -> Self {
        Self {
            client,
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}

#[async_trait]
impl PostSource for HttpPostSource {
    #[instrument(skip(self), fields(sort = %filters.sort))]
    async fn fetch_page(&self, filters: &Filters, cursor: Option<&Cursor>) -> DomainResult<Page> {
        filters.validate()?;

        let query = PostQuery::new(filters, cursor, self.page_size);
        let response: ListResponse<PostModel> = self.client.get_json("posts", &query).await?;
        let page = page_from_listing(response);

        debug!(
            items = page.items.len(),
            has_next_page = page.has_next_page(),
            "Fetched post page"
        );

        Ok(page)
    }
}
