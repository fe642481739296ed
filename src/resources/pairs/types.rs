use crate::common::{Asset, Market};
use serde::{Deserialize, Serialize};

/// A base/quote combination, e.g. `btceur`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pair {
    pub id: u64,
    pub symbol: String,
    pub base: Asset,
    pub quote: Asset,
    pub route: String,
    /// Only set for futures pairs (e.g. `"weekly"`, `"quarterly"`).
    #[serde(default)]
    pub futures_contract_period: Option<String>,
}

// GET /pairs/{pair} also repeats the pair fields; only the market list is kept.
#[derive(Debug, Deserialize)]
pub(crate) struct PairDetailsResponse {
    pub markets: Vec<Market>,
}
