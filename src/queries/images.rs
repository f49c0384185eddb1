//! Card image downloads, cached by image URL.

use std::sync::Arc;

use image::DynamicImage;

use crate::cache::ResourceCache;
use crate::connection::Connection;
use crate::error::{DatatankError, Result};
use crate::models::{Card, ImageType};

/// Query interface for card images.
pub struct ImageQuery<'a> {
    conn: &'a Connection,
    cache: &'a ResourceCache,
}

impl<'a> ImageQuery<'a> {
    pub fn new(conn: &'a Connection, cache: &'a ResourceCache) -> Self {
        Self { conn, cache }
    }

    /// Fetch one rendering of a card's image.
    ///
    /// The URL is resolved with [`Card::image_url`], so multi-faced cards
    /// yield their front face. A card without that rendering yields
    /// [`DatatankError::NotFound`] and no request is made.
    pub async fn fetch(&self, card: &Card, image_type: ImageType) -> Result<Arc<DynamicImage>> {
        let url = card.image_url(image_type).ok_or_else(|| {
            DatatankError::NotFound(format!("No {} image for card {}", image_type, card.id))
        })?;
        self.fetch_url(url).await
    }

    /// Fetch an image by URL.
    pub async fn fetch_url(&self, url: &str) -> Result<Arc<DynamicImage>> {
        self.cache
            .get_or_fetch(&self.cache.images, url.to_string(), async {
                let image = self.conn.get_image(url).await?;
                Ok(Arc::new(image))
            })
            .await
    }
}
