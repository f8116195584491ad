//! User wire model

use feed_core::EntityId;
use serde::{Deserialize, Serialize};

/// Image reference as sent by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageModel {
    pub url: String,
}

/// User as embedded in posts and comments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserModel {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub profile_image: Option<ImageModel>,
}
