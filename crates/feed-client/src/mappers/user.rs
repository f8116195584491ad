//! User and Image model -> entity mapper

use feed_core::entities::{Image, User};

use crate::models::{ImageModel, UserModel};

/// Convert ImageModel to Image entity
impl From<ImageModel> for Image {
    fn from(model: ImageModel) -> Self {
        Image { url: model.url }
    }
}

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            name: model.name,
            // Blank URLs render as the fallback avatar
            profile_image: model
                .profile_image
                .filter(|img| !img.url.trim().is_empty())
                .map(Image::from),
        }
    }
}
