use serde::{Deserialize, Serialize};

/// One row of `GET /exchanges`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeInfo {
    pub id: u64,
    pub symbol: String,
    pub name: String,
    pub route: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRoutes {
    /// URL listing every market on the exchange.
    pub markets: String,
}

/// `GET /exchanges/{exchange}` result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeDetails {
    pub id: u64,
    pub symbol: String,
    pub name: String,
    pub active: bool,
    pub routes: ExchangeRoutes,
}
