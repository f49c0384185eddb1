use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use super::enums::wire_enum;
use super::object::{CatalogObject, Object};

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// A named reference list of values, e.g. every land subtype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    object: Object<CatalogObject>,
    pub uri: String,
    pub total_values: usize,
    pub data: Vec<String>,
}

#[derive(Deserialize)]
struct CatalogWire {
    object: Object<CatalogObject>,
    uri: String,
    total_values: usize,
    data: Vec<String>,
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = CatalogWire::deserialize(deserializer)?;
        if wire.total_values != wire.data.len() {
            return Err(de::Error::custom(format!(
                "catalog total_values is {} but data has {} entries",
                wire.total_values,
                wire.data.len()
            )));
        }
        Ok(Catalog {
            object: wire.object,
            uri: wire.uri,
            total_values: wire.total_values,
            data: wire.data,
        })
    }
}

wire_enum! {
    /// The catalogs served under `/catalog/{name}`.
    pub enum CatalogName ("catalog name") {
        CardNames => "card-names",
        ArtistNames => "artist-names",
        WordBank => "word-bank",
        CreatureTypes => "creature-types",
        PlaneswalkerTypes => "planeswalker-types",
        LandTypes => "land-types",
        ArtifactTypes => "artifact-types",
        EnchantmentTypes => "enchantment-types",
        SpellTypes => "spell-types",
        Powers => "powers",
        Toughnesses => "toughnesses",
        Loyalties => "loyalties",
        Watermarks => "watermarks",
    }
}
