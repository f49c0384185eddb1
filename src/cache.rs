//! Bounded in-memory caches for every resource the Datatank serves.
//!
//! Each resource kind gets its own `moka::future::Cache` with an entry limit
//! and an optional time-to-live. Lookups go through
//! [`ResourceCache::get_or_fetch`], which also coalesces concurrent misses on
//! the same key into a single fetch.

use std::fmt;
use std::future::Future;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use image::DynamicImage;
use log::debug;
use moka::future::Cache;

use crate::config;
use crate::error::{DatatankError, Result};
use crate::models::{Card, Catalog, List, Ruling};

// ---------------------------------------------------------------------------
// CacheConfig
// ---------------------------------------------------------------------------

/// Capacity and expiry settings for the resource caches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    pub max_cards: u64,
    pub max_catalogs: u64,
    pub max_images: u64,
    pub max_rulings: u64,
    pub max_results: u64,
    /// Entries older than this are refetched. `None` keeps entries until
    /// they are evicted for capacity.
    pub time_to_live: Option<Duration>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_cards: config::DEFAULT_MAX_CARDS,
            max_catalogs: config::DEFAULT_MAX_CATALOGS,
            max_images: config::DEFAULT_MAX_IMAGES,
            max_rulings: config::DEFAULT_MAX_RULINGS,
            max_results: config::DEFAULT_MAX_RESULTS,
            time_to_live: None,
        }
    }
}

// ---------------------------------------------------------------------------
// CacheStats
// ---------------------------------------------------------------------------

/// Snapshot of cache occupancy and hit counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub cards: u64,
    pub catalogs: u64,
    pub images: u64,
    pub rulings: u64,
    pub results: u64,
    pub hits: u64,
    pub misses: u64,
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Datatank Status:")?;
        writeln!(f, "- Cards: {}", self.cards)?;
        writeln!(f, "- Catalogs: {}", self.catalogs)?;
        writeln!(f, "- Images: {}", self.images)?;
        writeln!(f, "- Rulings: {}", self.rulings)?;
        writeln!(f, "- Results: {}", self.results)?;
        write!(f, "- Hits/Misses: {}/{}", self.hits, self.misses)
    }
}

// ---------------------------------------------------------------------------
// ResourceCache
// ---------------------------------------------------------------------------

/// The five resource caches plus hit/miss counters.
pub struct ResourceCache {
    pub(crate) cards: Cache<String, Arc<Card>>,
    pub(crate) catalogs: Cache<String, Arc<Catalog>>,
    pub(crate) images: Cache<String, Arc<DynamicImage>>,
    pub(crate) rulings: Cache<String, Arc<List<Ruling>>>,
    pub(crate) results: Cache<String, Arc<List<Card>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ResourceCache {
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            cards: build(config.max_cards, config.time_to_live),
            catalogs: build(config.max_catalogs, config.time_to_live),
            images: build(config.max_images, config.time_to_live),
            rulings: build(config.max_rulings, config.time_to_live),
            results: build(config.max_results, config.time_to_live),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Return the cached value for `key`, or run `fetch` and cache its result.
    ///
    /// Concurrent callers missing on the same key wait for one shared fetch.
    /// Failed fetches are not cached.
    pub(crate) async fn get_or_fetch<V, F>(
        &self,
        cache: &Cache<String, V>,
        key: String,
        fetch: F,
    ) -> Result<V>
    where
        V: Clone + Send + Sync + 'static,
        F: Future<Output = Result<V>>,
    {
        let entry = cache
            .entry(key)
            .or_try_insert_with(fetch)
            .await
            .map_err(|e: Arc<DatatankError>| (*e).clone())?;

        if entry.is_fresh() {
            self.misses.fetch_add(1, Ordering::Relaxed);
            debug!("Cache miss, stored {}", entry.key());
        } else {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!("Cache hit for {}", entry.key());
        }
        Ok(entry.into_value())
    }

    /// Insert cards under their ids.
    pub(crate) async fn store_cards<I>(&self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        for card in cards {
            self.cards.insert(card.id.clone(), Arc::new(card)).await;
        }
    }

    /// Drop every cached entry and reset the counters.
    pub fn invalidate_all(&self) {
        self.cards.invalidate_all();
        self.catalogs.invalidate_all();
        self.images.invalidate_all();
        self.rulings.invalidate_all();
        self.results.invalidate_all();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    /// Settle pending maintenance and report current occupancy.
    pub async fn stats(&self) -> CacheStats {
        // moka's entry counts are eventually consistent until pending tasks run
        self.cards.run_pending_tasks().await;
        self.catalogs.run_pending_tasks().await;
        self.images.run_pending_tasks().await;
        self.rulings.run_pending_tasks().await;
        self.results.run_pending_tasks().await;

        CacheStats {
            cards: self.cards.entry_count(),
            catalogs: self.catalogs.entry_count(),
            images: self.images.entry_count(),
            rulings: self.rulings.entry_count(),
            results: self.results.entry_count(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

fn build<K, V>(max_capacity: u64, time_to_live: Option<Duration>) -> Cache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    let builder = Cache::builder().max_capacity(max_capacity);
    match time_to_live {
        Some(ttl) => builder.time_to_live(ttl).build(),
        None => builder.build(),
    }
}
