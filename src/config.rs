use std::time::Duration;

pub const API_BASE: &str = "https://api.scryfall.com";
pub const USER_AGENT: &str = concat!("cardref/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// Default per-cache entry limits.
pub const DEFAULT_MAX_CARDS: u64 = 10_000;
pub const DEFAULT_MAX_CATALOGS: u64 = 64;
pub const DEFAULT_MAX_IMAGES: u64 = 256;
pub const DEFAULT_MAX_RULINGS: u64 = 1_000;
pub const DEFAULT_MAX_RESULTS: u64 = 500;

/// Directory holding the fixtures bundled with the crate.
pub const FIXTURE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures");

/// URL of a single card by id.
pub fn card_url(base: &str, id: &str) -> String {
    format!("{}/cards/{}", base, urlencoding::encode(id))
}

/// URL of a named catalog.
pub fn catalog_url(base: &str, name: &str) -> String {
    format!("{}/catalog/{}", base, name)
}
