mod common;

use common::{asset_json, config_for, market_json, mount_result};
use cryptowatch_rs::Pairs;
use serde_json::json;
use wiremock::MockServer;

#[tokio::test]
async fn test_pairs_list() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        "/pairs",
        json!([
            {
                "id": 232,
                "symbol": "btceur",
                "base": asset_json(1, "btc", "Bitcoin", false),
                "quote": asset_json(2, "eur", "Euro", true),
                "route": "https://api.cryptowat.ch/pairs/btceur"
            },
            {
                "id": 1090,
                "symbol": "btcusd-weekly-futures",
                "base": asset_json(1, "btc", "Bitcoin", false),
                "quote": asset_json(3, "usd", "United States Dollar", true),
                "route": "https://api.cryptowat.ch/pairs/btcusd-weekly-futures",
                "futuresContractPeriod": "weekly"
            }
        ]),
    )
    .await;

    let pairs = Pairs::new(config_for(&server)).unwrap().list().await.unwrap();

    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].symbol, "btceur");
    assert_eq!(pairs[0].base.symbol, "btc");
    assert!(pairs[0].quote.fiat);
    assert_eq!(pairs[0].futures_contract_period, None);
    assert_eq!(pairs[1].futures_contract_period.as_deref(), Some("weekly"));
}

#[tokio::test]
async fn test_pairs_details_returns_markets() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        "/pairs/btceur",
        json!({
            "id": 232,
            "symbol": "btceur",
            "base": asset_json(1, "btc", "Bitcoin", false),
            "quote": asset_json(2, "eur", "Euro", true),
            "route": "https://api.cryptowat.ch/pairs/btceur",
            "markets": [
                market_json(86, "kraken", "btceur"),
                market_json(140, "bitstamp", "btceur"),
            ]
        }),
    )
    .await;

    let markets = Pairs::new(config_for(&server))
        .unwrap()
        .details("btceur")
        .await
        .unwrap();

    assert_eq!(markets.len(), 2);
    assert!(markets.iter().all(|m| m.pair == "btceur"));
    assert_eq!(markets[1].exchange, "bitstamp");
}
