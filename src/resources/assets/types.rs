use crate::common::Market;
use serde::{Deserialize, Serialize};

/// Markets an asset takes part in, split by the side of the pair it sits on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetMarkets {
    #[serde(default)]
    pub base: Vec<Market>,
    #[serde(default)]
    pub quote: Vec<Market>,
}

/// `GET /assets/{asset}` result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetDetails {
    pub id: u64,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub fiat: bool,
    #[serde(default)]
    pub markets: AssetMarkets,
}
