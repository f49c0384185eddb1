//! Search descriptor with canonical URL rendering.
//!
//! A [`Search`] always renders to the same URL for the same inputs, so the URL
//! doubles as the cache key for its results. Query parameters are emitted in
//! fixed alphabetical order and the query text is percent-encoded.
//!
//! # Example
//!
//! ```rust
//! use cardref::search::{Order, Search};
//! let url = Search::new("goblin")
//!     .order(Order::Cmc)
//!     .url("https://api.scryfall.com");
//! assert!(url.contains("order=cmc"));
//! assert!(url.contains("q=goblin"));
//! ```

use crate::models::enums::wire_enum;

wire_enum! {
    /// How duplicate printings of the same card are rolled up.
    pub enum Unique ("unique mode") {
        /// One result per gameplay object.
        Cards => "cards",
        /// One result per unique illustration.
        Art => "art",
        /// Every printing.
        Prints => "prints",
    }
}

wire_enum! {
    /// The field results are sorted by.
    pub enum Order ("sort order") {
        Name => "name",
        Set => "set",
        Released => "released",
        Rarity => "rarity",
        Color => "color",
        Usd => "usd",
        Tix => "tix",
        Eur => "eur",
        Cmc => "cmc",
        Power => "power",
        Toughness => "toughness",
        Edhrec => "edhrec",
        Artist => "artist",
    }
}

wire_enum! {
    pub enum Direction ("sort direction") {
        /// Let the API pick the most intuitive direction for the order.
        Auto => "auto",
        Asc => "asc",
        Desc => "desc",
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// A full-text card search with sort and de-duplication options.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Search {
    pub query: String,
    pub unique: Unique,
    pub order: Order,
    pub direction: Direction,
}

impl Search {
    /// Create a search for `query` with default options: unique cards,
    /// ordered by name, automatic direction.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            unique: Unique::Cards,
            order: Order::Name,
            direction: Direction::Auto,
        }
    }

    pub fn unique(mut self, unique: Unique) -> Self {
        self.unique = unique;
        self
    }

    pub fn order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Render the first-page URL of this search against `base`.
    pub fn url(&self, base: &str) -> String {
        format!(
            "{}/cards/search?dir={}&format=json&include_extras=false&include_multilingual=false&order={}&page=1&q={}&unique={}",
            base.trim_end_matches('/'),
            self.direction,
            self.order,
            urlencoding::encode(&self.query),
            self.unique
        )
    }
}
