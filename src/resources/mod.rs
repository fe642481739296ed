pub mod assets;
pub mod exchanges;
pub mod markets;
pub mod pairs;

// Re-export
pub use assets::{AssetDetails, AssetMarkets, Assets};
pub use exchanges::{ExchangeDetails, ExchangeInfo, ExchangeRoutes, Exchanges};
pub use markets::{
    Candle, InstrumentKey, InstrumentKind, LIQUIDITY_BASIS_POINTS, LiquiditySide, MarketDetails,
    MarketRoutes, Markets, OrderBook, OrderBookLiquidity, Period, PriceChange, PriceLevel, Summary,
    SummaryPrice, SummaryRow, Trade,
};
pub use pairs::{Pair, Pairs};
