use crate::common::number_or_string;
use crate::resources::markets::{InstrumentKind, Period};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Basis-point buckets reported by the order book liquidity endpoint.
pub const LIQUIDITY_BASIS_POINTS: [u32; 10] = [25, 50, 75, 100, 150, 200, 250, 300, 400, 500];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketRoutes {
    pub price: String,
    pub summary: String,
    pub orderbook: String,
    pub trades: String,
    pub ohlc: String,
}

// Only `active` and `routes` are read from the body.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MarketDetailsResponse {
    pub active: bool,
    pub routes: MarketRoutes,
}

/// `GET /markets/{exchange}/{pair}` result. `exchange` and `pair` echo the arguments
/// of the request. `active == false` means the market is no longer supported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketDetails {
    pub exchange: String,
    pub pair: String,
    pub active: bool,
    pub routes: MarketRoutes,
}

// [id, timestamp, price, amount]
pub(crate) type RawTrade = (u64, i64, f64, f64);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: u64,
    pub timestamp: DateTime<Utc>,
    pub price: f64,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceChange {
    pub percentage: f64,
    pub absolute: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryPrice {
    pub last: f64,
    pub high: f64,
    pub low: f64,
    pub change: PriceChange,
}

// Body of the summary endpoints before the pair is attached.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SummaryResponse {
    pub price: SummaryPrice,
    pub volume: f64,
    pub volume_quote: f64,
}

/// 24-hour sliding window statistics for one market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub price: SummaryPrice,
    pub volume: f64,
    pub volume_quote: f64,
    pub pair: String,
}

/// One row of the all-markets summary, flattened. `open` is derived as
/// `close - change.absolute`.
///
/// `market` is the exchange symbol. Rows from `index:<exchange>:<label>` keys carry
/// `kind == InstrumentKind::Index` and the index label as `pair`; every other row is
/// `InstrumentKind::Market`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub market: String,
    pub pair: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub volume_quote: f64,
    pub kind: InstrumentKind,
}

/// One `[price, amount]` order book level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct PriceLevel {
    pub price: f64,
    pub amount: f64,
}

impl From<(f64, f64)> for PriceLevel {
    fn from((price, amount): (f64, f64)) -> Self {
        PriceLevel { price, amount }
    }
}

impl From<PriceLevel> for (f64, f64) {
    fn from(level: PriceLevel) -> Self {
        (level.price, level.amount)
    }
}

/// Order book snapshot. `seq_num` lines the snapshot up with WebSocket deltas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBook {
    pub asks: Vec<PriceLevel>,
    pub bids: Vec<PriceLevel>,
    pub seq_num: u64,
}

/// Cumulative liquidity keyed by basis points away from the current price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LiquiditySide {
    #[serde(deserialize_with = "liquidity_buckets")]
    pub base: BTreeMap<u32, f64>,
    #[serde(deserialize_with = "liquidity_buckets")]
    pub quote: BTreeMap<u32, f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderBookLiquidity {
    pub bid: LiquiditySide,
    pub ask: LiquiditySide,
}

fn liquidity_buckets<'de, D>(deserializer: D) -> Result<BTreeMap<u32, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Bucket(#[serde(deserialize_with = "number_or_string")] f64);

    let raw = BTreeMap::<u32, Bucket>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|(bps, Bucket(v))| (bps, v)).collect())
}

// [closeTime, open, high, low, close, volume, quoteVolume]
pub(crate) type RawCandle = (i64, f64, f64, f64, f64, f64, f64);

/// One OHLC candle, stamped with the period it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Unix seconds.
    pub close_time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub quote_volume: f64,
    pub period: Period,
}

impl Candle {
    pub(crate) fn from_raw(raw: RawCandle, period: Period) -> Self {
        let (close_time, open, high, low, close, volume, quote_volume) = raw;
        Candle {
            close_time,
            open,
            high,
            low,
            close,
            volume,
            quote_volume,
            period,
        }
    }

    /// Human label of the candle period, e.g. `"1h"`.
    pub fn label(&self) -> &'static str {
        self.period.label()
    }

    pub fn close_time_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.close_time, 0)
    }
}
