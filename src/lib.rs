//! Client for the Scryfall card database.
//!
//! Provides typed models for cards, catalogs, rulings and paginated lists, a
//! search descriptor that renders canonical search URLs, and the [`Datatank`]:
//! a caching data-access layer through which every read goes.
//!
//! # Quick start
//!
//! ```no_run
//! use cardref::search::Search;
//! use cardref::Datatank;
//!
//! # async fn example() -> cardref::Result<()> {
//! let tank = Datatank::builder().build()?;
//!
//! // Look up a card by id (cached after the first request)
//! let goblin = tank.cards().fetch("3ee34158-867f-4685-8f2b-af9469b628c3").await?;
//!
//! // Search, then walk the pages
//! let mut page = tank.search().run(&Search::new("t:goblin")).await?;
//! while page.has_more {
//!     page = tank.search().next_page(&page).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
#[cfg(feature = "callbacks")]
pub mod callbacks;
pub mod config;
pub mod connection;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod queries;
pub mod search;

pub use cache::{CacheConfig, CacheStats, ResourceCache};
#[cfg(feature = "callbacks")]
pub use callbacks::CallbackDatatank;
pub use connection::Connection;
pub use error::{DatatankError, Result};
pub use fixtures::FixtureStore;
pub use search::Search;

use std::fmt;
use std::time::Duration;

use crate::models::Card;

// ---------------------------------------------------------------------------
// DatatankBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`Datatank`].
///
/// Use [`Datatank::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](DatatankBuilder::build) to create the tank.
pub struct DatatankBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
    offline: bool,
    cache: CacheConfig,
}

impl Default for DatatankBuilder {
    fn default() -> Self {
        Self {
            base_url: config::API_BASE.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            user_agent: config::USER_AGENT.to_string(),
            offline: false,
            cache: CacheConfig::default(),
        }
    }
}

impl DatatankBuilder {
    /// Set the API root. Defaults to [`config::API_BASE`].
    ///
    /// Mostly useful for pointing the tank at a mock server in tests.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `User-Agent` header sent with every request.
    ///
    /// Defaults to [`config::USER_AGENT`].
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Enable or disable offline mode.
    ///
    /// When offline, cached and seeded values are still served but every
    /// cache miss fails with [`DatatankError::Offline`] instead of making a
    /// request. Defaults to `false`.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Replace the whole cache configuration.
    pub fn cache(mut self, cache: CacheConfig) -> Self {
        self.cache = cache;
        self
    }

    /// Set the maximum number of cached cards.
    pub fn card_capacity(mut self, max_cards: u64) -> Self {
        self.cache.max_cards = max_cards;
        self
    }

    /// Expire every cached entry this long after it was stored.
    pub fn time_to_live(mut self, ttl: Duration) -> Self {
        self.cache.time_to_live = Some(ttl);
        self
    }

    /// Build the tank. No request is made until the first lookup.
    pub fn build(self) -> Result<Datatank> {
        let conn = Connection::new(&self.base_url, self.timeout, &self.user_agent, self.offline)?;
        let cache = ResourceCache::new(&self.cache);
        Ok(Datatank { conn, cache })
    }
}

// ---------------------------------------------------------------------------
// Datatank
// ---------------------------------------------------------------------------

/// The single gateway for card data.
///
/// Owns a [`Connection`] and a [`ResourceCache`] and exposes each resource
/// kind as a lightweight borrowing query wrapper. Share it across tasks with
/// an `Arc`; every method takes `&self`.
///
/// Created via [`Datatank::builder()`].
pub struct Datatank {
    conn: Connection,
    cache: ResourceCache,
}

impl Datatank {
    /// Create a new builder for configuring the tank.
    pub fn builder() -> DatatankBuilder {
        DatatankBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access card lookups by id.
    pub fn cards(&self) -> queries::CardQuery<'_> {
        queries::CardQuery::new(&self.conn, &self.cache)
    }

    /// Access the reference catalogs.
    pub fn catalogs(&self) -> queries::CatalogQuery<'_> {
        queries::CatalogQuery::new(&self.conn, &self.cache)
    }

    /// Access card image downloads.
    pub fn images(&self) -> queries::ImageQuery<'_> {
        queries::ImageQuery::new(&self.conn, &self.cache)
    }

    /// Access card rulings.
    pub fn rulings(&self) -> queries::RulingQuery<'_> {
        queries::RulingQuery::new(&self.conn, &self.cache)
    }

    /// Access paginated searches.
    ///
    /// Cards returned in any page are also cached by id.
    pub fn search(&self) -> queries::SearchQuery<'_> {
        queries::SearchQuery::new(&self.conn, &self.cache)
    }

    // -- Cache management --------------------------------------------------

    /// Insert already-decoded cards into the card cache, e.g. ones loaded
    /// from a [`FixtureStore`].
    pub async fn seed_cards<I>(&self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cache.store_cards(cards).await;
    }

    /// Current cache occupancy and hit/miss counters.
    pub async fn stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }

    /// The API root requests are made against, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.conn.base_url()
    }

    /// Whether cache misses are refused instead of fetched.
    pub fn is_offline(&self) -> bool {
        self.conn.is_offline()
    }

    /// Return a reference to the underlying [`Connection`] for advanced usage.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Datatank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Datatank(base_url={}, offline={})",
            self.conn.base_url(),
            self.conn.is_offline()
        )
    }
}
