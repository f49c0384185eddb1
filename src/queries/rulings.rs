//! Ruling lookups, cached by the card's rulings URL.

use std::sync::Arc;

use crate::cache::ResourceCache;
use crate::connection::Connection;
use crate::error::Result;
use crate::models::{Card, List, Ruling};

/// Query interface for card rulings.
pub struct RulingQuery<'a> {
    conn: &'a Connection,
    cache: &'a ResourceCache,
}

impl<'a> RulingQuery<'a> {
    pub fn new(conn: &'a Connection, cache: &'a ResourceCache) -> Self {
        Self { conn, cache }
    }

    /// Fetch every ruling for a card.
    pub async fn fetch(&self, card: &Card) -> Result<Arc<List<Ruling>>> {
        let url = card.rulings_uri.as_str();
        self.cache
            .get_or_fetch(&self.cache.rulings, url.to_string(), async {
                let rulings: List<Ruling> = self.conn.get_json(url).await?;
                Ok(Arc::new(rulings))
            })
            .await
    }
}
