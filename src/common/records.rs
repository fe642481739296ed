use serde::{Deserialize, Serialize};

/// A tradable asset (currency or token).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: u64,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub fiat: bool,
    pub route: String,
}

/// A pair listed on an exchange. Returned by the markets listing and embedded in
/// asset, exchange and pair lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market {
    pub id: u64,
    pub exchange: String,
    pub pair: String,
    pub active: bool,
    pub route: String,
}

/// Request allowance reported alongside every result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allowance {
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub remaining: f64,
    #[serde(default)]
    pub remaining_paid: Option<f64>,
    #[serde(default)]
    pub upgrade: Option<String>,
    #[serde(default)]
    pub account: Option<String>,
}
