use crate::common::CryptowatchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstrumentKind {
    Market,
    Index,
}

/// A key of the price map, `market:<exchange>:<pair>` or `index:<exchange>:<label>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstrumentKey {
    pub kind: InstrumentKind,
    pub exchange: String,
    pub symbol: String,
}

impl FromStr for InstrumentKey {
    type Err = CryptowatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let [kind, exchange, symbol] = parts.as_slice() else {
            return Err(CryptowatchError::malformed(format!(
                "Invalid instrument key: {}",
                s
            )));
        };

        let kind = match *kind {
            "market" => InstrumentKind::Market,
            "index" => InstrumentKind::Index,
            other => {
                return Err(CryptowatchError::malformed(format!(
                    "Unknown instrument kind '{}' in key: {}",
                    other, s
                )));
            }
        };

        if exchange.is_empty() || symbol.is_empty() {
            return Err(CryptowatchError::malformed(format!(
                "Invalid instrument key: {}",
                s
            )));
        }

        Ok(InstrumentKey {
            kind,
            exchange: exchange.to_string(),
            symbol: symbol.to_string(),
        })
    }
}

impl fmt::Display for InstrumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            InstrumentKind::Market => "market",
            InstrumentKind::Index => "index",
        };
        write!(f, "{}:{}:{}", kind, self.exchange, self.symbol)
    }
}
