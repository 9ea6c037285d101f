use tasca_core::{CoreError, Result as CoreErrorResult};

use serde::Deserialize;

/// Request body for `PUT /{id}/image`
#[derive(Debug, Default, Deserialize)]
pub struct UpdateImageRequest {
    #[serde(default)]
    pub image: Option<String>,
}

impl UpdateImageRequest {
    /// The URL itself is checked by the store validators
    pub fn into_image(self) -> CoreErrorResult<String> {
        self.image
            .filter(|image| !image.is_empty())
            .ok_or_else(|| CoreError::validation("You must provide an image URL", Some("image")))
    }
}
