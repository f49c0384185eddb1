//! Shared fixtures for the Datatank integration tests.
//!
//! Builds wire-format JSON for cards, lists, catalogs, rulings and API errors,
//! plus a `Datatank` pointed at a `wiremock` server.

#![allow(dead_code)]

use std::io::Cursor;

use cardref::Datatank;
use image::{DynamicImage, ImageFormat, RgbImage};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const RAGING_GOBLIN: &str = "3ee34158-867f-4685-8f2b-af9469b628c3";
pub const BUSHI_TENDERFOOT: &str = "864ad989-19a6-4930-8efc-bbc077a18c32";
pub const DOWN_DIRTY: &str = "c35c63c1-6344-4d8c-8f7d-cd253d12f9ae";

/// Route `log` output through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A tank with default caches talking to the mock server.
pub fn tank_for(server: &MockServer) -> Datatank {
    init_logging();
    Datatank::builder().base_url(server.uri()).build().unwrap()
}

// ---------------------------------------------------------------------------
// Wire JSON
// ---------------------------------------------------------------------------

/// A complete single-faced card whose URLs all point at `base`.
pub fn card_json(base: &str, id: &str, name: &str) -> Value {
    let mut card = json!({
        "object": "card",
        "id": id,
        "oracle_id": format!("oracle-{}", id),
        "name": name,
        "lang": "en",
        "uri": format!("{}/cards/{}", base, id),
        "scryfall_uri": format!("https://scryfall.com/card/tst/{}", id),
        "rulings_uri": format!("{}/cards/{}/rulings", base, id),
        "prints_search_uri": format!("{}/cards/search?q=oracleid%3A{}", base, id),
        "layout": "normal"
    });

    let gameplay = json!({
        "mana_cost": "{R}",
        "cmc": 1.0,
        "type_line": "Creature — Goblin",
        "colors": ["R"],
        "color_identity": ["R"],
        "legalities": { "modern": "legal", "standard": "not_legal" },
        "reserved": false,
        "foil": false,
        "nonfoil": true,
        "oversized": false
    });

    let print = json!({
        "released_at": "1997-05-01",
        "highres_image": true,
        "image_uris": {
            "normal": format!("{}/images/{}.png", base, id),
            "small": format!("{}/images/{}-small.png", base, id)
        },
        "games": ["paper"],
        "promo": false,
        "reprint": false,
        "variation": false,
        "set": "tst",
        "set_name": "Test Set",
        "set_type": "expansion",
        "set_uri": format!("{}/sets/tst", base),
        "set_search_uri": format!("{}/cards/search?q=e%3Atst", base)
    });

    let print_details = json!({
        "scryfall_set_uri": "https://scryfall.com/sets/tst",
        "collector_number": "1",
        "digital": false,
        "rarity": "common",
        "border_color": "black",
        "frame": "1997",
        "full_art": false,
        "textless": false,
        "booster": true,
        "story_spotlight": false,
        "prices": { "usd": "0.10", "usd_foil": null },
        "related_uris": {}
    });

    // json! literals this large would exceed the macro recursion limit
    for part in [gameplay, print, print_details] {
        if let (Some(fields), Value::Object(extra)) = (card.as_object_mut(), part) {
            fields.extend(extra);
        }
    }
    card
}

/// One page of a list. `has_more` follows `next_page`.
pub fn list_json(data: Vec<Value>, next_page: Option<String>, total_cards: Option<u32>) -> Value {
    json!({
        "object": "list",
        "has_more": next_page.is_some(),
        "next_page": next_page,
        "total_cards": total_cards,
        "data": data
    })
}

pub fn catalog_json(uri: &str, values: &[&str]) -> Value {
    json!({
        "object": "catalog",
        "uri": uri,
        "total_values": values.len(),
        "data": values
    })
}

pub fn ruling_json(oracle_id: &str, published_at: &str, comment: &str) -> Value {
    json!({
        "object": "ruling",
        "oracle_id": oracle_id,
        "source": "wotc",
        "published_at": published_at,
        "comment": comment
    })
}

pub fn error_json(status: u16, code: &str, details: &str) -> Value {
    json!({
        "object": "error",
        "code": code,
        "status": status,
        "details": details
    })
}

/// PNG-encoded bytes of a small solid image.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = DynamicImage::ImageRgb8(RgbImage::new(width, height));
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png).unwrap();
    buf.into_inner()
}
