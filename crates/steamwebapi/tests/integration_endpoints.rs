//! Integration tests for every endpoint using wiremock

mod common;

use steamwebapi::{
    AutocompleteRequest, Game, InventoryBatchRequest, InventoryRequest, ItemRequest,
    ItemsRequest, Screenshot, ScreenshotFormat, ScreenshotRequest, SortOrder, SteamId, Wear,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_account_me() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account/me"))
        .and(query_param("key", common::test_api_key().as_str()))
        .and(query_param("production", "1"))
        .respond_with(common::json_fixture(200, "account_me"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (client, _) = common::mock_client(&mock_server.uri());
    let account = client.account().me().await.expect("Request failed");

    assert_eq!(account.today, 412);
    assert_eq!(account.month, 20480);
    assert_eq!(account.package, "starter");
    assert!(account.last_100.is_empty());

    mock_server.verify().await;
}

#[tokio::test]
async fn test_profile() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/steam/api/profile"))
        .and(query_param("id", "76561197960287930"))
        .respond_with(common::json_fixture(200, "profile"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (client, _) = common::mock_client(&mock_server.uri());
    let profile = client
        .steam()
        .profile(SteamId::parse("[U:1:22202]").unwrap())
        .await
        .unwrap();

    assert_eq!(profile.persona_name, "Rabscuttle");
    assert_eq!(profile.steam_id.as_legacy(), "STEAM_1:0:11101");
    assert_eq!(profile.location_country_code.as_deref(), Some("US"));
    assert!(!profile.is_banned());
    assert_eq!(
        profile.created_at().map(|t| t.timestamp()),
        Some(1063407589)
    );
}

#[tokio::test]
async fn test_profiles_batch_joins_ids() {
    let mock_server = MockServer::start().await;
    let profile: serde_json::Value =
        serde_json::from_str(&common::load_response_fixture("profile")).unwrap();

    Mock::given(method("GET"))
        .and(path("/steam/api/profile/batch"))
        .and(query_param("ids", "76561197960287930,76561197960265733"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![profile.clone(), profile]))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (client, _) = common::mock_client(&mock_server.uri());
    let profiles = client
        .steam()
        .profiles(&[SteamId::from(22202u32), SteamId::from(5u32)])
        .await
        .unwrap();

    assert_eq!(profiles.len(), 2);
}

#[tokio::test]
async fn test_items_with_filters() {
    let mock_server = MockServer::start().await;
    let item: serde_json::Value =
        serde_json::from_str(&common::load_response_fixture("item")).unwrap();

    Mock::given(method("GET"))
        .and(path("/steam/api/items"))
        .and(query_param("game", "cs2"))
        .and(query_param("sort_by", "priceZa"))
        .and(query_param("wear", "ft"))
        .and(query_param("max", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![item]))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (client, _) = common::mock_client(&mock_server.uri());
    let request = ItemsRequest::builder()
        .game(Game::Cs2)
        .sort_by(SortOrder::PriceDesc)
        .wear(Wear::FieldTested)
        .max(1u32)
        .build()
        .unwrap();

    let items = client.steam().items(request).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].item_group.as_deref(), Some("rifle"));
    assert_eq!(items[0].price_latest, Some(18.5));
    assert!(items[0].price_updated_at.is_some());
}

#[tokio::test]
async fn test_item() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/steam/api/item"))
        .and(query_param("market_hash_name", "AK-47 | Redline (Field-Tested)"))
        .and(query_param("currency", "EUR"))
        .respond_with(common::json_fixture(200, "item"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (client, _) = common::mock_client(&mock_server.uri());
    let request = ItemRequest::builder()
        .market_hash_name("AK-47 | Redline (Field-Tested)")
        .currency("EUR")
        .build()
        .unwrap();

    let item = client.steam().item(request).await.unwrap();
    assert_eq!(item.market_hash_name, "AK-47 | Redline (Field-Tested)");
    assert_eq!(item.tags.unwrap()[0].localized_tag_name, "Rifle");
}

#[tokio::test]
async fn test_inventory() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/steam/api/inventory"))
        .and(query_param("id", "76561197960287930"))
        .and(query_param("game", "cs2"))
        .and(query_param("parse", "true"))
        .respond_with(common::json_fixture(200, "inventory"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (client, _) = common::mock_client(&mock_server.uri());
    let request = InventoryRequest::builder()
        .steam_id(SteamId::parse("76561197960287930").unwrap())
        .game(Game::Cs2)
        .parse(true)
        .build()
        .unwrap();

    let inventory = client.steam().inventory(request).await.unwrap();
    assert_eq!(inventory.len(), 1);

    let item = &inventory[0];
    assert!(item.tradeable());
    assert_eq!(item.count, 2);
    assert_eq!(item.stack_value(), 36.0);
    assert!(item.created_at.is_none());
    assert!(item.latest_steam_sell_at.is_some());
    assert_eq!(item.tag1.as_deref(), Some("Rifle"));
}

#[tokio::test]
async fn test_inventories_batch() {
    let mock_server = MockServer::start().await;
    let inventory: serde_json::Value =
        serde_json::from_str(&common::load_response_fixture("inventory")).unwrap();

    Mock::given(method("GET"))
        .and(path("/steam/api/inventory/batch"))
        .and(query_param("steam_ids", "76561197960287930"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "76561197960287930": inventory })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let (client, _) = common::mock_client(&mock_server.uri());
    let request = InventoryBatchRequest::builder()
        .steam_ids(vec![SteamId::from(22202u32)])
        .build()
        .unwrap();

    let inventories = client.steam().inventories(request).await.unwrap();
    assert_eq!(inventories["76561197960287930"].len(), 1);
}

#[tokio::test]
async fn test_float() {
    let mock_server = MockServer::start().await;
    let inspect = "steam://rungame/730/76561202255233023/+csgo_econ_action_preview%20S1A2D3";

    Mock::given(method("GET"))
        .and(path("/steam/api/float"))
        .and(query_param("url", inspect))
        .respond_with(common::json_fixture(200, "float"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (client, _) = common::mock_client(&mock_server.uri());
    let data = client.steam().float(inspect).await.unwrap();

    assert_eq!(data.paint_seed, 661);
    assert_eq!(data.stickers.len(), 1);
    assert!(data.has_sticker);
}

#[tokio::test]
async fn test_float_screenshot_png() {
    let mock_server = MockServer::start().await;
    let png = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    Mock::given(method("GET"))
        .and(path("/steam/api/float/screenshot"))
        .and(query_param("format", "download"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(png.clone(), "image/png"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (client, _) = common::mock_client(&mock_server.uri());
    let request = ScreenshotRequest::builder()
        .url("steam://rungame/730/76561202255233023/+csgo_econ_action_preview%20S1A2D3")
        .format(ScreenshotFormat::Download)
        .build()
        .unwrap();

    let screenshot = client.steam().float_screenshot(request).await.unwrap();
    match screenshot {
        Screenshot::Image(bytes) => assert_eq!(bytes.as_ref(), png.as_slice()),
        other => panic!("Expected image, got {:?}", other),
    }
}

#[tokio::test]
async fn test_autocomplete() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/steam/api/complete/items"))
        .and(query_param("search", "redl"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"markethashname": "AK-47 | Redline (Field-Tested)", "image": "https://example.invalid/a.png"},
            {"markethashname": "AWP | Redline (Field-Tested)", "image": "https://example.invalid/b.png"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (client, _) = common::mock_client(&mock_server.uri());
    let request = AutocompleteRequest::builder().search("redl").build().unwrap();

    let results = client.steam().autocomplete(request).await.unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[1].market_hash_name, "AWP | Redline (Field-Tested)");
}

#[tokio::test]
async fn test_currency_exchange() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/currency/api/exchange"))
        .and(query_param("base", "USD"))
        .respond_with(common::json_fixture(200, "exchange"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (client, _) = common::mock_client(&mock_server.uri());
    let rates = client.currency().exchange("USD").await.unwrap();

    assert_eq!(rates.symbols(), vec!["EUR", "JPY", "PLN", "USD"]);
    assert_eq!(rates.get("JPY").unwrap().convert(10.0), 1553.0);
    assert_eq!(rates.to_map()["EUR"].precision, 2);
}
