//! # feed-client
//!
//! HTTP layer implementing the feed-core collaborator traits against the remote REST API.
//!
//! ## Overview
//!
//! This crate provides `reqwest` implementations for the post listing and the
//! comment mutation endpoints. It handles:
//!
//! - A shared API client (base URL, timeout, bearer token)
//! - Wire models with serde derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use feed_client::{ApiClient, HttpPostSource};
//! use feed_common::ClientConfig;
//! use feed_core::{Filters, PostSource};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::from_env()?;
//!     let client = ApiClient::new(&config.api)?;
//!     let posts = HttpPostSource::new(client, config.feed.page_size);
//!
//!     let page = posts.fetch_page(&Filters::default(), None).await?;
//!     println!("{} posts", page.items.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod mappers;
pub mod models;
pub mod repositories;

// Re-export commonly used types
pub use client::ApiClient;
pub use repositories::{HttpCommentRepository, HttpPostSource};
