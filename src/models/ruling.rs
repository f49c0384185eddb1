use serde::{Deserialize, Serialize};

use super::object::{Object, RulingObject};

/// A rules clarification attached to a card's oracle identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruling {
    object: Object<RulingObject>,
    pub oracle_id: String,
    /// Who published the ruling, `wotc` or `scryfall`.
    pub source: String,
    pub published_at: String,
    pub comment: String,
}
