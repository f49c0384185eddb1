//! Card lookups by id, cached by id.

use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use log::warn;

use crate::cache::ResourceCache;
use crate::config;
use crate::connection::Connection;
use crate::error::{DatatankError, Result};
use crate::models::Card;

// ---------------------------------------------------------------------------
// CardQuery
// ---------------------------------------------------------------------------

/// Query interface for individual cards.
pub struct CardQuery<'a> {
    conn: &'a Connection,
    cache: &'a ResourceCache,
}

impl<'a> CardQuery<'a> {
    /// Create a new `CardQuery` bound to the given connection and cache.
    pub fn new(conn: &'a Connection, cache: &'a ResourceCache) -> Self {
        Self { conn, cache }
    }

    // -- Single card lookup ------------------------------------------------

    /// Fetch one card by id.
    ///
    /// A cached card is returned without any request. Otherwise the card is
    /// requested from `/cards/{id}` and cached under `id`. An unknown id
    /// yields [`DatatankError::Request`] carrying the API's 404 error.
    pub async fn fetch(&self, id: &str) -> Result<Arc<Card>> {
        let url = config::card_url(self.conn.base_url(), id);
        self.cache
            .get_or_fetch(&self.cache.cards, id.to_string(), async {
                let card: Card = self.conn.get_json(&url).await?;
                Ok(Arc::new(card))
            })
            .await
    }

    /// Return a card only if it is already cached.
    pub async fn cached(&self, id: &str) -> Option<Arc<Card>> {
        self.cache.cards.get(id).await
    }

    // -- Batch lookup ------------------------------------------------------

    /// Fetch several cards concurrently.
    ///
    /// Resolves once every id has either succeeded or failed. Each failure is
    /// passed to `on_error` as soon as it happens and does not affect the
    /// other fetches. The returned cards keep the order of `ids`, with failed
    /// ids left out.
    pub async fn fetch_many<F>(&self, ids: &[&str], mut on_error: F) -> Vec<Arc<Card>>
    where
        F: FnMut(&str, DatatankError),
    {
        let mut pending: FuturesUnordered<_> = ids
            .iter()
            .enumerate()
            .map(|(index, id)| async move { (index, *id, self.fetch(id).await) })
            .collect();

        let mut slots: Vec<Option<Arc<Card>>> = vec![None; ids.len()];
        while let Some((index, id, result)) = pending.next().await {
            match result {
                Ok(card) => slots[index] = Some(card),
                Err(err) => {
                    warn!("Failed to fetch card {}: {}", id, err);
                    on_error(id, err);
                }
            }
        }

        slots.into_iter().flatten().collect()
    }
}
