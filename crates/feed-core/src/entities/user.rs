//! User entity and the signed-in actor

use crate::value_objects::EntityId;

/// Remote image reference (avatar, cover)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub url: String,
}

impl Image {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Author of a post or comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub profile_image: Option<Image>,
}

impl User {
    /// Create a new User without a profile image
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            profile_image: None,
        }
    }

    /// Attach a profile image
    pub fn with_profile_image(mut self, url: impl Into<String>) -> Self {
        self.profile_image = Some(Image::new(url));
        self
    }

    /// Link to the user's public profile page
    pub fn profile_path(&self) -> String {
        format!("/community/users/{}", self.id)
    }

    /// Alt text for the avatar image
    pub fn avatar_alt(&self) -> String {
        format!("{} profile image", self.name)
    }
}

/// The current actor as seen by the auth context
///
/// An actor without `id` is anonymous.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Actor {
    pub id: Option<EntityId>,
    pub name: Option<String>,
}

impl Actor {
    /// Anonymous actor
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Signed-in actor
    pub fn signed_in(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
        }
    }

    #[inline]
    pub fn is_authenticated(&self) -> bool {
        self.id.is_some()
    }
}
