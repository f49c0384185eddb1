//! Datatank integration tests against a mocked API.

mod common;

use std::sync::Arc;
use std::time::Duration;

use cardref::models::{Card, CatalogName, ImageType};
use cardref::search::Search;
use cardref::{CacheConfig, Datatank, DatatankError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_card(server: &MockServer, id: &str, name: &str, expected: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/cards/{}", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::card_json(&server.uri(), id, name)))
        .expect(expected)
        .mount(server)
        .await;
}

async fn mount_missing_card(server: &MockServer, id: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/cards/{}", id)))
        .respond_with(ResponseTemplate::new(404).set_body_json(common::error_json(
            404,
            "not_found",
            "No card found with the given ID or set code and collector number.",
        )))
        .mount(server)
        .await;
}

// ---------------------------------------------------------------------------
// cards().fetch
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_card_decodes_response() {
    let server = MockServer::start().await;
    mount_card(&server, common::RAGING_GOBLIN, "Raging Goblin", 1).await;
    let tank = common::tank_for(&server);

    let card = tank.cards().fetch(common::RAGING_GOBLIN).await.unwrap();
    assert_eq!(card.name, "Raging Goblin");
    assert_eq!(card.converted_mana_cost, Some(1.0));
    assert_eq!(card.id, common::RAGING_GOBLIN);
}

#[tokio::test]
async fn second_fetch_is_served_from_cache() {
    let server = MockServer::start().await;
    mount_card(&server, common::RAGING_GOBLIN, "Raging Goblin", 1).await;
    let tank = common::tank_for(&server);

    let first = tank.cards().fetch(common::RAGING_GOBLIN).await.unwrap();
    let second = tank.cards().fetch(common::RAGING_GOBLIN).await.unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    let stats = tank.stats().await;
    assert_eq!(stats.cards, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 1);
}

#[tokio::test]
async fn unknown_card_returns_request_error() {
    let server = MockServer::start().await;
    mount_missing_card(&server, "failure").await;
    let tank = common::tank_for(&server);

    let err = tank.cards().fetch("failure").await.unwrap_err();
    let request = err.request_error().expect("structured API error");
    assert_eq!(request.status, 404);
    assert_eq!(request.code, "not_found");
}

#[tokio::test]
async fn failed_fetch_is_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cards/flaky"))
        .respond_with(ResponseTemplate::new(404).set_body_json(common::error_json(404, "not_found", "gone")))
        .expect(2)
        .mount(&server)
        .await;
    let tank = common::tank_for(&server);

    assert!(tank.cards().fetch("flaky").await.is_err());
    assert!(tank.cards().fetch("flaky").await.is_err());
    assert_eq!(tank.stats().await.cards, 0);
}

#[tokio::test]
async fn non_json_error_body_returns_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cards/broken"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;
    let tank = common::tank_for(&server);

    match tank.cards().fetch("broken").await.unwrap_err() {
        DatatankError::Status { status, url } => {
            assert_eq!(status, 503);
            assert!(url.ends_with("/cards/broken"));
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn malformed_body_is_a_recoverable_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cards/garbled"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"object\": \"card\", \"id\": "))
        .mount(&server)
        .await;
    let tank = common::tank_for(&server);

    let err = tank.cards().fetch("garbled").await.unwrap_err();
    assert!(matches!(err, DatatankError::Json { .. }), "{}", err);
}

#[tokio::test]
async fn discriminator_mismatch_is_a_json_error() {
    let server = MockServer::start().await;
    let mut body = common::card_json(&server.uri(), "tagged", "Tagged");
    body["object"] = serde_json::json!("set");
    Mock::given(method("GET"))
        .and(path("/cards/tagged"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;
    let tank = common::tank_for(&server);

    let err = tank.cards().fetch("tagged").await.unwrap_err();
    assert!(err.to_string().contains("expected object 'card', found 'set'"), "{}", err);
}

#[tokio::test]
async fn concurrent_fetches_share_one_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/cards/{}", common::RAGING_GOBLIN)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::card_json(&server.uri(), common::RAGING_GOBLIN, "Raging Goblin"))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&server)
        .await;
    let tank = common::tank_for(&server);

    let cards = tank.cards();
    let (a, b, c) = tokio::join!(
        cards.fetch(common::RAGING_GOBLIN),
        cards.fetch(common::RAGING_GOBLIN),
        cards.fetch(common::RAGING_GOBLIN),
    );

    let (a, b, c) = (a.unwrap(), b.unwrap(), c.unwrap());
    assert!(Arc::ptr_eq(&a, &b));
    assert!(Arc::ptr_eq(&b, &c));
}

// ---------------------------------------------------------------------------
// cards().fetch_many
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_many_keeps_input_order_and_reports_failures() {
    let server = MockServer::start().await;
    mount_card(&server, common::RAGING_GOBLIN, "Raging Goblin", 1).await;
    mount_card(&server, common::BUSHI_TENDERFOOT, "Bushi Tenderfoot", 1).await;
    mount_missing_card(&server, "failure").await;
    let tank = common::tank_for(&server);

    let mut failures = Vec::new();
    let cards = tank
        .cards()
        .fetch_many(
            &[common::BUSHI_TENDERFOOT, "failure", common::RAGING_GOBLIN],
            |id, err| failures.push((id.to_string(), err)),
        )
        .await;

    let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Bushi Tenderfoot", "Raging Goblin"]);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, "failure");
    assert_eq!(failures[0].1.request_error().map(|e| e.status), Some(404));
}

#[tokio::test]
async fn fetch_many_with_no_ids_is_empty() {
    let server = MockServer::start().await;
    let tank = common::tank_for(&server);

    let cards = tank.cards().fetch_many(&[], |_, _| panic!("no fetches expected")).await;
    assert!(cards.is_empty());
}

// ---------------------------------------------------------------------------
// catalogs, rulings, images
// ---------------------------------------------------------------------------

#[tokio::test]
async fn catalog_is_fetched_once() {
    let server = MockServer::start().await;
    let uri = format!("{}/catalog/land-types", server.uri());
    Mock::given(method("GET"))
        .and(path("/catalog/land-types"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(common::catalog_json(&uri, &["Desert", "Forest", "Island"])),
        )
        .expect(1)
        .mount(&server)
        .await;
    let tank = common::tank_for(&server);

    let first = tank.catalogs().fetch(CatalogName::LandTypes).await.unwrap();
    let second = tank.catalogs().fetch(CatalogName::LandTypes).await.unwrap();

    assert_eq!(first.total_values, 3);
    assert!(first.data.iter().any(|v| v == "Forest"));
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(tank.catalogs().url(CatalogName::LandTypes), uri);
}

#[tokio::test]
async fn rulings_are_fetched_from_the_cards_rulings_uri() {
    let server = MockServer::start().await;
    mount_card(&server, common::DOWN_DIRTY, "Down // Dirty", 1).await;
    let oracle = "eba21e3b-e2b2-4e0b-82e3-f0849943fd89";
    Mock::given(method("GET"))
        .and(path(format!("/cards/{}/rulings", common::DOWN_DIRTY)))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::list_json(
            vec![
                common::ruling_json(oracle, "2013-04-15", "Down is cast from your hand."),
                common::ruling_json(oracle, "2013-04-15", "Dirty is cast from your graveyard."),
            ],
            None,
            None,
        )))
        .expect(1)
        .mount(&server)
        .await;
    let tank = common::tank_for(&server);

    let card = tank.cards().fetch(common::DOWN_DIRTY).await.unwrap();
    let rulings = tank.rulings().fetch(&card).await.unwrap();
    let again = tank.rulings().fetch(&card).await.unwrap();

    assert_eq!(rulings.len(), 2);
    assert_eq!(rulings.data[0].oracle_id, oracle);
    assert_eq!(rulings.data[0].source, "wotc");
    assert_eq!(rulings.data[0].published_at, "2013-04-15");
    assert!(Arc::ptr_eq(&rulings, &again));
}

#[tokio::test]
async fn image_is_decoded_and_cached() {
    let server = MockServer::start().await;
    mount_card(&server, common::RAGING_GOBLIN, "Raging Goblin", 1).await;
    Mock::given(method("GET"))
        .and(path(format!("/images/{}.png", common::RAGING_GOBLIN)))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(common::png_bytes(3, 5)))
        .expect(1)
        .mount(&server)
        .await;
    let tank = common::tank_for(&server);

    let card = tank.cards().fetch(common::RAGING_GOBLIN).await.unwrap();
    let image = tank.images().fetch(&card, ImageType::Normal).await.unwrap();
    let again = tank.images().fetch(&card, ImageType::Normal).await.unwrap();

    assert_eq!((image.width(), image.height()), (3, 5));
    assert!(Arc::ptr_eq(&image, &again));
}

#[tokio::test]
async fn missing_image_type_is_not_found() {
    let server = MockServer::start().await;
    mount_card(&server, common::RAGING_GOBLIN, "Raging Goblin", 1).await;
    let tank = common::tank_for(&server);

    let card = tank.cards().fetch(common::RAGING_GOBLIN).await.unwrap();
    let err = tank.images().fetch(&card, ImageType::ArtCrop).await.unwrap_err();
    assert!(matches!(err, DatatankError::NotFound(_)), "{}", err);
}

#[tokio::test]
async fn undecodable_image_is_an_image_error() {
    let server = MockServer::start().await;
    mount_card(&server, common::RAGING_GOBLIN, "Raging Goblin", 1).await;
    Mock::given(method("GET"))
        .and(path(format!("/images/{}.png", common::RAGING_GOBLIN)))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"not an image".to_vec()))
        .mount(&server)
        .await;
    let tank = common::tank_for(&server);

    let card = tank.cards().fetch(common::RAGING_GOBLIN).await.unwrap();
    let err = tank.images().fetch(&card, ImageType::Normal).await.unwrap_err();
    assert!(matches!(err, DatatankError::Image { .. }), "{}", err);
}

// ---------------------------------------------------------------------------
// search
// ---------------------------------------------------------------------------

/// Two pages of goblins. Page two must be requested `second_page_fetches` times.
async fn mount_goblin_pages(server: &MockServer, second_page_fetches: u64) {
    let base = server.uri();
    let next = format!("{}/cards/search?page=2&q=t%3Agoblin", base);

    Mock::given(method("GET"))
        .and(path("/cards/search"))
        .and(query_param("q", "t:goblin"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::list_json(
            vec![
                common::card_json(&base, "goblin-1", "Goblin Guide"),
                common::card_json(&base, "goblin-2", "Goblin Lackey"),
            ],
            Some(next),
            Some(3),
        )))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/cards/search"))
        .and(query_param("q", "t:goblin"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::list_json(
            vec![common::card_json(&base, "goblin-3", "Goblin Matron")],
            None,
            Some(3),
        )))
        .expect(second_page_fetches)
        .mount(server)
        .await;
}

#[tokio::test]
async fn search_pages_through_all_results() {
    let server = MockServer::start().await;
    mount_goblin_pages(&server, 1).await;
    let tank = common::tank_for(&server);

    let mut page = tank.search().run(&Search::new("t:goblin")).await.unwrap();
    let total = page.total_cards;
    let mut seen: Vec<String> = page.iter().map(|c| c.id.clone()).collect();
    while page.has_more {
        page = tank.search().next_page(&page).await.unwrap();
        seen.extend(page.iter().map(|c| c.id.clone()));
    }

    assert!(!page.has_more);
    assert_eq!(page.next_page, None);
    assert_eq!(total, Some(seen.len() as u32));
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 3);
}

#[tokio::test]
async fn next_page_of_final_page_is_rejected() {
    let server = MockServer::start().await;
    mount_goblin_pages(&server, 1).await;
    let tank = common::tank_for(&server);

    let first = tank.search().run(&Search::new("t:goblin")).await.unwrap();
    let last = tank.search().next_page(&first).await.unwrap();

    let err = tank.search().next_page(&last).await.unwrap_err();
    assert!(matches!(err, DatatankError::InvalidArgument(_)), "{}", err);
}

#[tokio::test]
async fn search_results_populate_card_cache() {
    let server = MockServer::start().await;
    mount_goblin_pages(&server, 0).await;
    Mock::given(method("GET"))
        .and(path("/cards/goblin-2"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    let tank = common::tank_for(&server);

    let page = tank.search().run(&Search::new("t:goblin")).await.unwrap();
    let card = tank.cards().fetch("goblin-2").await.unwrap();
    assert_eq!(card.name, "Goblin Lackey");
    assert_eq!(card, Arc::new(page.data[1].clone()));

    let again = tank.search().run(&Search::new("t:goblin")).await.unwrap();
    assert!(Arc::ptr_eq(&page, &again));

    let stats = tank.stats().await;
    assert_eq!(stats.results, 1);
    assert_eq!(stats.cards, 2);
}

// ---------------------------------------------------------------------------
// Cache policy
// ---------------------------------------------------------------------------

#[tokio::test]
async fn card_cache_respects_capacity() {
    let server = MockServer::start().await;
    common::init_logging();
    let tank = Datatank::builder().base_url(server.uri()).card_capacity(2).build().unwrap();

    let cards = (0..6)
        .map(|i| serde_json::from_value(common::card_json(&server.uri(), &format!("seed-{}", i), "Seeded")).unwrap())
        .collect::<Vec<Card>>();
    tank.seed_cards(cards).await;

    assert!(tank.stats().await.cards <= 2);
}

#[tokio::test]
async fn expired_entries_are_refetched() {
    let server = MockServer::start().await;
    mount_card(&server, common::RAGING_GOBLIN, "Raging Goblin", 2).await;
    common::init_logging();
    let tank = Datatank::builder()
        .base_url(server.uri())
        .cache(CacheConfig {
            time_to_live: Some(Duration::from_millis(100)),
            ..CacheConfig::default()
        })
        .build()
        .unwrap();

    let first = tank.cards().fetch(common::RAGING_GOBLIN).await.unwrap();
    tokio::time::sleep(Duration::from_millis(300)).await;
    let second = tank.cards().fetch(common::RAGING_GOBLIN).await.unwrap();

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first, second);
}

#[tokio::test]
async fn clear_drops_cached_entries() {
    let server = MockServer::start().await;
    mount_card(&server, common::RAGING_GOBLIN, "Raging Goblin", 2).await;
    let tank = common::tank_for(&server);

    tank.cards().fetch(common::RAGING_GOBLIN).await.unwrap();
    tank.clear();
    assert!(tank.cards().cached(common::RAGING_GOBLIN).await.is_none());
    tank.cards().fetch(common::RAGING_GOBLIN).await.unwrap();

    let stats = tank.stats().await;
    assert_eq!(stats.cards, 1);
    assert_eq!(stats.misses, 1);
}

#[tokio::test]
async fn stats_render_a_status_report() {
    let server = MockServer::start().await;
    let tank = common::tank_for(&server);

    let report = tank.stats().await.to_string();
    assert!(report.starts_with("Datatank Status:"));
    assert!(report.contains("- Cards: 0"));
}

// ---------------------------------------------------------------------------
// Offline mode
// ---------------------------------------------------------------------------

#[tokio::test]
async fn offline_misses_never_touch_the_network() {
    let server = MockServer::start().await;
    mount_card(&server, common::RAGING_GOBLIN, "Raging Goblin", 0).await;
    common::init_logging();
    let tank = Datatank::builder().base_url(server.uri()).offline(true).build().unwrap();

    let err = tank.cards().fetch(common::RAGING_GOBLIN).await.unwrap_err();
    assert!(matches!(err, DatatankError::Offline(_)), "{}", err);
}

#[tokio::test]
async fn offline_serves_seeded_cards() {
    let server = MockServer::start().await;
    mount_card(&server, common::RAGING_GOBLIN, "Raging Goblin", 0).await;
    common::init_logging();
    let tank = Datatank::builder().base_url(server.uri()).offline(true).build().unwrap();

    let seeded: Card = serde_json::from_value(common::card_json(&server.uri(), common::RAGING_GOBLIN, "Raging Goblin")).unwrap();
    tank.seed_cards(vec![seeded]).await;

    let card = tank.cards().fetch(common::RAGING_GOBLIN).await.unwrap();
    assert_eq!(card.name, "Raging Goblin");
    assert!(tank.is_offline());
}
