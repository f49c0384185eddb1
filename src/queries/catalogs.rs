//! Catalog lookups, cached by catalog URL.

use std::sync::Arc;

use crate::cache::ResourceCache;
use crate::config;
use crate::connection::Connection;
use crate::error::Result;
use crate::models::{Catalog, CatalogName};

/// Query interface for the reference catalogs (land types, powers, ...).
pub struct CatalogQuery<'a> {
    conn: &'a Connection,
    cache: &'a ResourceCache,
}

impl<'a> CatalogQuery<'a> {
    pub fn new(conn: &'a Connection, cache: &'a ResourceCache) -> Self {
        Self { conn, cache }
    }

    /// Fetch a catalog by name.
    pub async fn fetch(&self, name: CatalogName) -> Result<Arc<Catalog>> {
        let url = self.url(name);
        self.cache
            .get_or_fetch(&self.cache.catalogs, url.clone(), async {
                let catalog: Catalog = self.conn.get_json(&url).await?;
                Ok(Arc::new(catalog))
            })
            .await
    }

    /// The URL a catalog is fetched from, which is also its cache key.
    pub fn url(&self, name: CatalogName) -> String {
        config::catalog_url(self.conn.base_url(), name.as_str())
    }
}
