//! `cryptowatch-rs`
//!
//! Async client for the Cryptowatch public REST API. One client per resource family
//! ([`Assets`], [`Exchanges`], [`Markets`], [`Pairs`]); each call is a single GET whose
//! `result` payload is reshaped into typed records.
//!
//! ## Quickstart
//!
//! ```no_run
//! use cryptowatch_rs::{CryptowatchConfig, Markets, Period};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), cryptowatch_rs::CryptowatchError> {
//! let markets = Markets::new(CryptowatchConfig::from_env()?)?;
//!
//! let summary = markets.summary_24h("kraken", "btceur").await?;
//! println!("{} last={} vol={}", summary.pair, summary.price.last, summary.volume);
//!
//! let candles = markets
//!     .ohlc("kraken", "btceur", None, None, Some(&[Period::OneHour, Period::OneDay][..]))
//!     .await?;
//! for c in candles.iter().take(3) {
//!     println!("[{}] {} close={}", c.label(), c.close_time, c.close);
//! }
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod resources;

// Re-export common types
pub use common::{
    Allowance, Asset, CRYPTOWATCH_API_BASE, CryptowatchConfig, CryptowatchError, Market,
    ResourceTrait, Result,
};

pub use resources::{
    AssetDetails, AssetMarkets, Assets, Candle, ExchangeDetails, ExchangeInfo, ExchangeRoutes,
    Exchanges, InstrumentKey, InstrumentKind, LIQUIDITY_BASIS_POINTS, LiquiditySide,
    MarketDetails, MarketRoutes, Markets, OrderBook, OrderBookLiquidity, Pair, Pairs, Period,
    PriceChange, PriceLevel, Summary, SummaryPrice, SummaryRow, Trade,
};
