//! Post entity and the page of posts returned by the listing

use chrono::{DateTime, Utc};

use super::{Comment, Image, User};
use crate::value_objects::{Cursor, EntityId};

/// A clap (like) left on a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clap {
    pub id: EntityId,
    pub user_id: EntityId,
    pub post_id: EntityId,
    pub created_at: DateTime<Utc>,
}

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: EntityId,
    pub slug: String,
    pub title: String,
    pub cover_image: Option<Image>,
    pub user: User,
    /// Tag names in first-seen order, without duplicates
    pub tags: Vec<String>,
    pub comments: Vec<Comment>,
    pub claps: Vec<Clap>,
    pub visits: Option<u64>,
    pub words: Option<u64>,
    pub read_time: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a post with no cover, tags, comments, or claps
    pub fn new(
        id: EntityId,
        slug: impl Into<String>,
        title: impl Into<String>,
        user: User,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            slug: slug.into(),
            title: title.into(),
            cover_image: None,
            user,
            tags: Vec::new(),
            comments: Vec::new(),
            claps: Vec::new(),
            visits: None,
            words: None,
            read_time: String::new(),
            created_at,
            updated_at: created_at,
        }
    }

    /// Replace the tags, keeping first-seen order and dropping duplicates and blanks
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = dedup_tags(tags);
        self
    }

    /// Link to the post page
    pub fn path(&self) -> String {
        format!("/community/posts/{}", self.slug)
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    pub fn clap_count(&self) -> usize {
        self.claps.len()
    }

    /// Visit count, zero when the server does not report it
    pub fn visit_count(&self) -> u64 {
        self.visits.unwrap_or(0)
    }

    /// Word count, zero when the server does not report it
    pub fn word_count(&self) -> u64 {
        self.words.unwrap_or(0)
    }
}

/// Normalize a tag list into an ordered set
pub(crate) fn dedup_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.into().trim().to_string();
        if !tag.is_empty() && !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

/// One page of the post listing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Page {
    pub items: Vec<Post>,
    /// Cursor of the following page; `None` on the last page
    pub next_cursor: Option<Cursor>,
    /// Total number of matching posts, when the server knows it
    pub total: Option<u64>,
}

impl Page {
    pub fn new(items: Vec<Post>, next_cursor: Option<Cursor>) -> Self {
        Self {
            items,
            next_cursor,
            total: None,
        }
    }

    #[inline]
    pub fn has_next_page(&self) -> bool {
        self.next_cursor.is_some()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
