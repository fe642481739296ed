#![allow(dead_code)]

use cryptowatch_rs::CryptowatchConfig;
use serde_json::{Value, json};
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-api-key";

pub fn config_for(server: &MockServer) -> CryptowatchConfig {
    CryptowatchConfig::new(TEST_API_KEY)
        .with_api_base(&server.uri())
        .expect("mock server uri should be a valid base")
        .with_timeout(Duration::from_secs(5))
}

/// Wrap a payload the way every Cryptowatch response does.
pub fn envelope(result: Value) -> Value {
    json!({
        "result": result,
        "allowance": {
            "cost": 0.002,
            "remaining": 9.998,
            "upgrade": "For unlimited API access, create an account at https://cryptowat.ch"
        }
    })
}

/// Mount a GET on `route` that requires the API key and answers with `result` wrapped in
/// the envelope. Expects exactly one call.
pub async fn mount_result(server: &MockServer, route: &str, result: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(query_param("apikey", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(result)))
        .expect(1)
        .mount(server)
        .await;
}

pub fn market_json(id: u64, exchange: &str, pair: &str) -> Value {
    json!({
        "id": id,
        "exchange": exchange,
        "pair": pair,
        "active": true,
        "route": format!("https://api.cryptowat.ch/markets/{}/{}", exchange, pair)
    })
}

pub fn asset_json(id: u64, symbol: &str, name: &str, fiat: bool) -> Value {
    json!({
        "id": id,
        "symbol": symbol,
        "name": name,
        "fiat": fiat,
        "route": format!("https://api.cryptowat.ch/assets/{}", symbol)
    })
}
