mod common;

use common::{asset_json, config_for, market_json, mount_result};
use cryptowatch_rs::{Assets, CryptowatchError};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_assets_list_preserves_order() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        "/assets",
        json!([
            asset_json(60, "jpy", "Japanese Yen", true),
            asset_json(1, "btc", "Bitcoin", false),
            asset_json(77, "eth", "Ethereum", false),
        ]),
    )
    .await;

    let assets = Assets::new(config_for(&server)).unwrap().list().await.unwrap();

    assert_eq!(assets.len(), 3);
    let symbols: Vec<&str> = assets.iter().map(|a| a.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["jpy", "btc", "eth"]);

    let jpy = &assets[0];
    assert_eq!(jpy.id, 60);
    assert_eq!(jpy.name, "Japanese Yen");
    assert!(jpy.fiat);
    assert_eq!(jpy.route, "https://api.cryptowat.ch/assets/jpy");
    assert!(!assets[1].fiat);
}

#[tokio::test]
async fn test_assets_details_splits_base_and_quote() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        "/assets/btc",
        json!({
            "id": 1,
            "symbol": "btc",
            "name": "Bitcoin",
            "fiat": false,
            "markets": {
                "base": [
                    market_json(1, "bitfinex", "btcusd"),
                    market_json(2, "kraken", "btceur"),
                ],
                "quote": [market_json(3, "binance", "ethbtc")]
            }
        }),
    )
    .await;

    let markets = Assets::new(config_for(&server))
        .unwrap()
        .details("btc")
        .await
        .unwrap();

    assert_eq!(markets.base.len(), 2);
    assert_eq!(markets.base[0].exchange, "bitfinex");
    assert_eq!(markets.base[1].pair, "btceur");
    assert_eq!(markets.quote.len(), 1);
    assert_eq!(markets.quote[0].pair, "ethbtc");
    assert!(markets.quote[0].active);
}

#[tokio::test]
async fn test_assets_info_missing_side_is_empty() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        "/assets/doge",
        json!({
            "id": 99,
            "symbol": "doge",
            "name": "Dogecoin",
            "fiat": false,
            "markets": { "base": [market_json(10, "kraken", "dogeusd")] }
        }),
    )
    .await;

    let info = Assets::new(config_for(&server))
        .unwrap()
        .info("doge")
        .await
        .unwrap();

    assert_eq!(info.symbol, "doge");
    assert_eq!(info.name, "Dogecoin");
    assert_eq!(info.markets.base.len(), 1);
    assert!(info.markets.quote.is_empty());
}

#[tokio::test]
async fn test_assets_details_unknown_symbol_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/assets/notreal"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Asset not found"})))
        .mount(&server)
        .await;

    let result = Assets::new(config_for(&server))
        .unwrap()
        .details("notreal")
        .await;

    match result {
        Err(err @ CryptowatchError::ApiError { .. }) => {
            assert!(err.is_not_found());
            if let CryptowatchError::ApiError { status, message } = err {
                assert_eq!(status, 404);
                assert_eq!(message, "Asset not found");
            }
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_assets_list_without_result_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/assets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"allowance": {"cost": 0.0, "remaining": 1.0}})))
        .mount(&server)
        .await;

    let result = Assets::new(config_for(&server)).unwrap().list().await;

    assert!(
        matches!(result, Err(CryptowatchError::MalformedResponseError(_))),
        "Missing result should be malformed, got {:?}",
        result
    );
}

#[tokio::test]
async fn test_assets_details_encodes_path_segment() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        "/assets/a%2Fb",
        json!({
            "id": 5,
            "symbol": "a/b",
            "name": "Slash",
            "fiat": false,
            "markets": { "base": [], "quote": [] }
        }),
    )
    .await;

    let markets = Assets::new(config_for(&server))
        .unwrap()
        .details("a/b")
        .await
        .unwrap();

    assert!(markets.base.is_empty());
    assert!(markets.quote.is_empty());
}
