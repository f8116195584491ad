//! Post wire models

use chrono::{DateTime, Utc};
use feed_core::EntityId;
use serde::{Deserialize, Serialize};

use super::{CommentModel, ImageModel, UserModel};

/// Clap as embedded in a post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClapModel {
    pub id: EntityId,
    pub user_id: EntityId,
    pub post_id: EntityId,
    pub created_at: DateTime<Utc>,
}

/// Post as returned by the listing endpoint
///
/// The API names the cover field `coverImage`; `cover_image` is accepted too.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostModel {
    pub id: EntityId,
    pub slug: String,
    pub title: String,
    #[serde(default, rename = "coverImage", alias = "cover_image")]
    pub cover_image: Option<ImageModel>,
    pub user: UserModel,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub comments: Vec<CommentModel>,
    #[serde(default)]
    pub claps: Vec<ClapModel>,
    #[serde(default)]
    pub visits: Option<u64>,
    #[serde(default)]
    pub words: Option<u64>,
    #[serde(default)]
    pub read_time: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
