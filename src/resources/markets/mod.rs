mod instrument;
mod period;
mod types;

use crate::common::resource::create_resource;
use crate::common::{CryptowatchError, Market, ResourceTrait, Result, datetime_from_unix};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use types::{MarketDetailsResponse, RawCandle, RawTrade, SummaryResponse};

pub use instrument::{InstrumentKey, InstrumentKind};
pub use period::Period;
pub use types::{
    Candle, LIQUIDITY_BASIS_POINTS, LiquiditySide, MarketDetails, MarketRoutes, OrderBook,
    OrderBookLiquidity, PriceChange, PriceLevel, Summary, SummaryPrice, SummaryRow, Trade,
};

create_resource!(Markets, "Markets");

impl Markets {
    /// GET /markets
    pub async fn list(&self) -> Result<Vec<Market>> {
        self.get(&["markets"], &[]).await
    }

    /// Active flag and endpoint routes (price, summary, orderbook, trades, ohlc) of one market.
    /// The returned `exchange` and `pair` are the ones requested.
    ///
    /// GET /markets/{exchange}/{pair}
    pub async fn details(&self, exchange: &str, pair: &str) -> Result<MarketDetails> {
        let raw: MarketDetailsResponse = self.get(&["markets", exchange, pair], &[]).await?;
        Ok(MarketDetails {
            exchange: exchange.to_string(),
            pair: pair.to_string(),
            active: raw.active,
            routes: raw.routes,
        })
    }

    /// Last price of every market and index, keyed `market:<exchange>:<pair>` or
    /// `index:<exchange>:<label>`. Served from a cache a few seconds behind.
    ///
    /// GET /markets/prices
    pub async fn all_market_prices(&self) -> Result<HashMap<String, f64>> {
        self.get(&["markets", "prices"], &[]).await
    }

    /// Most recent trades, newest first. The API returns 50 by default and at most 1000.
    ///
    /// GET /markets/{exchange}/{pair}/trades
    pub async fn trades(
        &self,
        exchange: &str,
        pair: &str,
        limit: Option<u32>,
    ) -> Result<Vec<Trade>> {
        self.fetch_trades(exchange, pair, None, limit).await
    }

    /// Like [`Markets::trades`], restricted to trades after `since`.
    pub async fn trades_since(
        &self,
        exchange: &str,
        pair: &str,
        since: DateTime<Utc>,
        limit: Option<u32>,
    ) -> Result<Vec<Trade>> {
        self.fetch_trades(exchange, pair, Some(since), limit).await
    }

    async fn fetch_trades(
        &self,
        exchange: &str,
        pair: &str,
        since: Option<DateTime<Utc>>,
        limit: Option<u32>,
    ) -> Result<Vec<Trade>> {
        let mut query = Vec::new();
        if let Some(since) = since {
            query.push(("since", since.timestamp().to_string()));
        }
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }

        let raw: Vec<RawTrade> = self
            .get(&["markets", exchange, pair, "trades"], &query)
            .await?;
        reshape_trades(raw)
    }

    /// Last, high and low price, change and volume over a 24-hour sliding window.
    /// The requested `pair` is attached to the result.
    ///
    /// GET /markets/{exchange}/{pair}/summary
    pub async fn summary_24h(&self, exchange: &str, pair: &str) -> Result<Summary> {
        let raw: SummaryResponse = self
            .get(&["markets", exchange, pair, "summary"], &[])
            .await?;
        Ok(Summary {
            price: raw.price,
            volume: raw.volume,
            volume_quote: raw.volume_quote,
            pair: pair.to_string(),
        })
    }

    /// 24-hour summary of every market, one flat row per market, ordered by market, pair
    /// and kind. Index keys keep `InstrumentKind::Index` on their row; the API does not
    /// deduplicate a `market:<exchange>:<pair>` key against a plain `<exchange>:<pair>` key,
    /// so both forms would yield a row each.
    ///
    /// GET /markets/summaries
    pub async fn summary_24h_all(&self) -> Result<Vec<SummaryRow>> {
        let raw: HashMap<String, SummaryResponse> =
            self.get(&["markets", "summaries"], &[]).await?;
        reshape_summaries(raw)
    }

    /// Order book snapshot. `depth` caps the cumulative amount per side, `span` keeps orders
    /// within that percentage of the midpoint, `limit` caps the number of orders per side.
    ///
    /// GET /markets/{exchange}/{pair}/orderbook
    pub async fn order_book(
        &self,
        exchange: &str,
        pair: &str,
        depth: Option<f64>,
        span: Option<f64>,
        limit: Option<u32>,
    ) -> Result<OrderBook> {
        let mut query = Vec::new();
        if let Some(depth) = depth {
            query.push(("depth", depth.to_string()));
        }
        if let Some(span) = span {
            query.push(("span", span.to_string()));
        }
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }

        self.get(&["markets", exchange, pair, "orderbook"], &query)
            .await
    }

    /// GET /markets/{exchange}/{pair}/orderbook/liquidity
    pub async fn order_book_liquidity(
        &self,
        exchange: &str,
        pair: &str,
    ) -> Result<OrderBookLiquidity> {
        self.get(&["markets", exchange, pair, "orderbook", "liquidity"], &[])
            .await
    }

    /// Candles for every returned period, sorted by period then close time.
    ///
    /// `before` / `after` are Unix seconds bounding candle open time; `periods` restricts
    /// the response to those periods.
    ///
    /// GET /markets/{exchange}/{pair}/ohlc
    pub async fn ohlc(
        &self,
        exchange: &str,
        pair: &str,
        before: Option<i64>,
        after: Option<i64>,
        periods: Option<&[Period]>,
    ) -> Result<Vec<Candle>> {
        let mut query = Vec::new();
        if let Some(before) = before {
            query.push(("before", before.to_string()));
        }
        if let Some(after) = after {
            query.push(("after", after.to_string()));
        }
        if let Some(periods) = periods.filter(|p| !p.is_empty()) {
            let joined = periods
                .iter()
                .map(|p| p.seconds().to_string())
                .collect::<Vec<_>>()
                .join(",");
            query.push(("periods", joined));
        }

        let raw: HashMap<String, Vec<RawCandle>> = self
            .get(&["markets", exchange, pair, "ohlc"], &query)
            .await?;
        reshape_ohlc(raw)
    }
}

fn reshape_trades(raw: Vec<RawTrade>) -> Result<Vec<Trade>> {
    let mut trades = raw
        .into_iter()
        .map(|(id, timestamp, price, amount)| -> Result<Trade> {
            if timestamp < 0 {
                return Err(CryptowatchError::malformed(format!(
                    "Negative trade timestamp: {}",
                    timestamp
                )));
            }
            Ok(Trade {
                id,
                timestamp: datetime_from_unix(timestamp, "trade")?,
                price,
                amount,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    trades.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    Ok(trades)
}

fn reshape_summaries(raw: HashMap<String, SummaryResponse>) -> Result<Vec<SummaryRow>> {
    let mut rows = raw
        .into_iter()
        .map(|(key, summary)| -> Result<SummaryRow> {
            let (kind, market, pair) = split_summary_key(&key)?;
            let close = summary.price.last;
            Ok(SummaryRow {
                market,
                pair,
                open: close - summary.price.change.absolute,
                high: summary.price.high,
                low: summary.price.low,
                close,
                volume: summary.volume,
                volume_quote: summary.volume_quote,
                kind,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    rows.sort_by(|a, b| (&a.market, &a.pair, a.kind).cmp(&(&b.market, &b.pair, b.kind)));
    Ok(rows)
}

/// `<exchange>:<pair>`, or the three-part `market:`/`index:` form used by the price map.
/// Anything else is rejected instead of guessing where the exchange ends.
fn split_summary_key(key: &str) -> Result<(InstrumentKind, String, String)> {
    match key.split(':').collect::<Vec<_>>().as_slice() {
        [exchange, pair] if !exchange.is_empty() && !pair.is_empty() => Ok((
            InstrumentKind::Market,
            exchange.to_string(),
            pair.to_string(),
        )),
        [_, _, _] => {
            let instrument: InstrumentKey = key.parse()?;
            Ok((instrument.kind, instrument.exchange, instrument.symbol))
        }
        _ => Err(CryptowatchError::malformed(format!(
            "Cannot split summary key into exchange and pair: {}",
            key
        ))),
    }
}

fn reshape_ohlc(raw: HashMap<String, Vec<RawCandle>>) -> Result<Vec<Candle>> {
    let mut candles = Vec::new();
    for (key, rows) in raw {
        let seconds = key
            .parse::<u64>()
            .map_err(|_| CryptowatchError::malformed(format!("Unknown OHLC period: {}", key)))?;
        let period = Period::try_from(seconds)?;
        candles.extend(rows.into_iter().map(|row| Candle::from_raw(row, period)));
    }

    candles.sort_by_key(|c| (c.period.seconds(), c.close_time));
    Ok(candles)
}
