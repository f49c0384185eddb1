//! Paginated card searches, cached by page URL.
//!
//! Every card in a fetched page is also stored in the card cache, so a later
//! lookup of any of them by id does not hit the network.

use std::sync::Arc;

use log::{debug, warn};

use crate::cache::ResourceCache;
use crate::connection::Connection;
use crate::error::{DatatankError, Result};
use crate::models::{Card, List};
use crate::search::Search;

// ---------------------------------------------------------------------------
// SearchQuery
// ---------------------------------------------------------------------------

/// Query interface for full-text card searches.
pub struct SearchQuery<'a> {
    conn: &'a Connection,
    cache: &'a ResourceCache,
}

impl<'a> SearchQuery<'a> {
    pub fn new(conn: &'a Connection, cache: &'a ResourceCache) -> Self {
        Self { conn, cache }
    }

    /// Run a search and return its first page.
    pub async fn run(&self, search: &Search) -> Result<Arc<List<Card>>> {
        let url = search.url(self.conn.base_url());
        self.fetch_page(url).await
    }

    /// Fetch the page following `previous`.
    ///
    /// `previous` must have `has_more` set and carry a `next_page` URL;
    /// anything else is rejected with [`DatatankError::InvalidArgument`]
    /// before any request is made.
    pub async fn next_page(&self, previous: &List<Card>) -> Result<Arc<List<Card>>> {
        let url = match previous.continuation() {
            Some(url) => url.to_string(),
            None => {
                warn!("Requested the next page of a final search page");
                return Err(DatatankError::InvalidArgument(
                    "search results have no further pages".to_string(),
                ));
            }
        };
        self.fetch_page(url).await
    }

    async fn fetch_page(&self, url: String) -> Result<Arc<List<Card>>> {
        self.cache
            .get_or_fetch(&self.cache.results, url.clone(), async {
                let page: List<Card> = self.conn.get_json(&url).await?;
                debug!("Caching {} cards from {}", page.len(), url);
                self.cache.store_cards(page.data.iter().cloned()).await;
                Ok(Arc::new(page))
            })
            .await
    }
}
