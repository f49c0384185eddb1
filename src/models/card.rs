use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::enums::{Color, FrameEffect, FrameType, ImageType, Layout, Legality, Rarity, RelatedType, SetType};
use super::object::{CardObject, FaceObject, Object, RelatedObject};

// ---------------------------------------------------------------------------
// Card — A single printing of a card
// ---------------------------------------------------------------------------

/// A card object as returned by `/cards/{id}` and inside search results.
///
/// Fields are grouped the way the API documents them: core identifiers,
/// gameplay attributes, then print attributes. Optional wire fields are
/// `None` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    object: Object<CardObject>,

    // -- Core fields --
    pub arena_id: Option<u64>,
    pub id: String,
    pub lang: String,
    pub mtgo_id: Option<u64>,
    pub mtgo_foil_id: Option<u64>,
    pub multiverse_ids: Option<Vec<u64>>,
    pub tcgplayer_id: Option<u64>,
    pub oracle_id: Option<String>,
    pub prints_search_uri: String,
    pub rulings_uri: String,
    pub scryfall_uri: String,
    pub uri: String,

    // -- Gameplay fields --
    pub all_parts: Option<Vec<Related>>,
    pub card_faces: Option<Vec<Face>>,
    /// Absent on reversible cards, where each face carries its own.
    #[serde(rename = "cmc")]
    pub converted_mana_cost: Option<f64>,
    pub colors: Option<Vec<Color>>,
    pub color_identity: Vec<Color>,
    pub color_indicator: Option<Vec<Color>>,
    pub edhrec_rank: Option<u32>,
    pub foil: bool,
    pub hand_modifier: Option<String>,
    pub layout: Layout,
    pub legalities: BTreeMap<String, Legality>,
    pub life_modifier: Option<String>,
    pub loyalty: Option<String>,
    pub mana_cost: Option<String>,
    pub name: String,
    pub nonfoil: bool,
    pub oracle_text: Option<String>,
    pub oversized: bool,
    pub power: Option<String>,
    pub reserved: bool,
    pub toughness: Option<String>,
    pub type_line: Option<String>,

    // -- Print fields --
    pub artist: Option<String>,
    pub booster: bool,
    pub border_color: String,
    pub card_back_id: Option<String>,
    pub collector_number: String,
    pub digital: bool,
    pub flavor_text: Option<String>,
    pub frame_effects: Option<Vec<FrameEffect>>,
    pub frame: FrameType,
    pub full_art: bool,
    pub games: Vec<String>,
    pub highres_image: bool,
    pub illustration_id: Option<String>,
    pub image_uris: Option<BTreeMap<ImageType, String>>,
    pub prices: BTreeMap<String, Option<String>>,
    pub printed_name: Option<String>,
    pub printed_text: Option<String>,
    pub printed_type_line: Option<String>,
    pub promo: bool,
    pub promo_types: Option<Vec<String>>,
    pub purchase_uris: Option<BTreeMap<String, String>>,
    pub rarity: Rarity,
    pub related_uris: BTreeMap<String, String>,
    pub released_at: String,
    pub reprint: bool,
    pub scryfall_set_uri: String,
    pub set_name: String,
    pub set_search_uri: String,
    pub set_type: SetType,
    pub set_uri: String,
    pub set: String,
    pub story_spotlight: bool,
    pub textless: bool,
    pub variation: bool,
    pub variation_of: Option<String>,
    pub watermark: Option<String>,
}

impl Card {
    /// The faces of a multi-faced card, or an empty slice.
    pub fn faces(&self) -> &[Face] {
        self.card_faces.as_deref().unwrap_or(&[])
    }

    pub fn is_multi_faced(&self) -> bool {
        !self.faces().is_empty()
    }

    /// Resolve the URL of one rendering of this card's image.
    ///
    /// Layouts that print imagery per face (and any card without card-level
    /// `image_uris`) use the front face. Everything else uses the card-level
    /// map.
    pub fn image_url(&self, image_type: ImageType) -> Option<&str> {
        let face_level = self.layout.has_face_imagery() || self.image_uris.is_none();
        let uris = if face_level {
            self.faces().first().and_then(|face| face.image_uris.as_ref())
        } else {
            self.image_uris.as_ref()
        };
        uris.and_then(|map| map.get(&image_type)).map(String::as_str)
    }

    /// Legality in one format, if the format is listed.
    pub fn legality(&self, format: &str) -> Option<Legality> {
        self.legalities.get(format).copied()
    }
}

// ---------------------------------------------------------------------------
// Face — One side of a multi-faced card
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Face {
    object: Object<FaceObject>,
    pub artist: Option<String>,
    #[serde(rename = "cmc")]
    pub converted_mana_cost: Option<f64>,
    pub color_indicator: Option<Vec<Color>>,
    pub colors: Option<Vec<Color>>,
    pub flavor_text: Option<String>,
    pub illustration_id: Option<String>,
    pub image_uris: Option<BTreeMap<ImageType, String>>,
    pub loyalty: Option<String>,
    pub mana_cost: Option<String>,
    pub name: String,
    pub oracle_text: Option<String>,
    pub power: Option<String>,
    pub printed_name: Option<String>,
    pub printed_text: Option<String>,
    pub printed_type_line: Option<String>,
    pub toughness: Option<String>,
    pub type_line: Option<String>,
    pub watermark: Option<String>,
}

// ---------------------------------------------------------------------------
// Related — A reference to another card
// ---------------------------------------------------------------------------

/// An entry of a card's `all_parts`: a token it makes, a meld partner, etc.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Related {
    object: Object<RelatedObject>,
    pub id: String,
    pub component: RelatedType,
    pub name: String,
    pub type_line: String,
    pub uri: String,
}
