use super::scale::{LinearScale, extent};
use super::value_objects::SurfaceSize;
use crate::domain::market_data::Candle;

/// Time (x) and price (y) scales for one chart
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartScales {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl ChartScales {
    /// x spans the earliest to latest timestamp, y the lowest low to the
    /// highest high. Empty input leaves both domains undefined.
    pub fn from_candles(candles: &[Candle]) -> Self {
        let mut scales = Self::default();
        scales.rebuild(candles);
        scales
    }

    /// Recompute both domains, keeping the current pixel ranges.
    pub fn rebuild(&mut self, candles: &[Candle]) {
        self.x.set_domain(extent(candles, &[&|c: &Candle| c.timestamp.as_f64()]));
        self.y.set_domain(extent(
            candles,
            &[&|c: &Candle| c.ohlcv.high.value(), &|c: &Candle| c.ohlcv.low.value()],
        ));
    }

    /// Fit the ranges to a surface: x to `[0, width]`, y to `[height, 0]` so
    /// that higher prices sit higher on screen.
    pub fn measure(&mut self, size: SurfaceSize) {
        self.x.set_range(0.0, size.width);
        self.y.set_range(size.height, 0.0);
    }

    pub fn is_defined(&self) -> bool {
        self.x.is_defined() && self.y.is_defined()
    }
}
