pub use super::value_objects::{OHLCV, Price, Timestamp, Volume};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay};

/// Price movement of a single candle
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Unchanged,
}

/// Domain entity - Candle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: Timestamp,
    pub ohlcv: OHLCV,
}

impl Candle {
    pub fn new(timestamp: Timestamp, ohlcv: OHLCV) -> Self {
        Self { timestamp, ohlcv }
    }

    pub fn is_bullish(&self) -> bool {
        self.ohlcv.close > self.ohlcv.open
    }

    pub fn is_bearish(&self) -> bool {
        self.ohlcv.close < self.ohlcv.open
    }

    pub fn direction(&self) -> Direction {
        if self.is_bullish() {
            Direction::Up
        } else if self.is_bearish() {
            Direction::Down
        } else {
            Direction::Unchanged
        }
    }
}

/// Domain entity - Candle series
///
/// Candles are kept in the order they were supplied; extents do not rely on
/// sorting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandleSeries {
    candles: Vec<Candle>,
}

impl CandleSeries {
    pub fn new(candles: Vec<Candle>) -> Self {
        Self { candles }
    }

    pub fn get_candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn count(&self) -> usize {
        self.candles.len()
    }

    /// Replace every candle, returning the previous count.
    pub fn replace(&mut self, candles: Vec<Candle>) -> usize {
        let previous = self.candles.len();
        self.candles = candles;
        previous
    }

    /// Earliest and latest timestamps
    pub fn time_range(&self) -> Option<(Timestamp, Timestamp)> {
        let first = self.candles.first()?.timestamp;
        Some(self.candles.iter().fold((first, first), |(min, max), c| {
            (min.min(c.timestamp), max.max(c.timestamp))
        }))
    }

    /// Lowest low and highest high
    pub fn price_range(&self) -> Option<(Price, Price)> {
        let first = self.candles.first()?;
        let mut min_price = first.ohlcv.low;
        let mut max_price = first.ohlcv.high;

        for candle in &self.candles {
            if candle.ohlcv.low.value() < min_price.value() {
                min_price = candle.ohlcv.low;
            }
            if candle.ohlcv.high.value() > max_price.value() {
                max_price = candle.ohlcv.high;
            }
        }

        Some((min_price, max_price))
    }
}

impl From<Vec<Candle>> for CandleSeries {
    fn from(candles: Vec<Candle>) -> Self {
        Self::new(candles)
    }
}
