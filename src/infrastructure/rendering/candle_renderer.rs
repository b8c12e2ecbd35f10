use crate::config::CandleConfig;
use crate::domain::{
    chart::{ChartScales, DrawingSurface, auto_bandwidth},
    errors::RenderingResult,
    logging::{LogComponent, get_logger},
    market_data::{Candle, Direction},
};

type Accessor<T> = Box<dyn Fn(&T) -> f64>;
type Decorate<T> = Box<dyn Fn(&mut dyn DrawingSurface, &T, usize)>;

/// Pixel geometry of one candle, relative to the chart origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandleGlyph {
    pub cross: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub width: f64,
    pub direction: Direction,
}

/// Candlestick series: accessors pull the cross value (time) and the four
/// prices out of each datum, both scales map them to pixels.
pub struct CandlestickSeries<T> {
    cross_value: Accessor<T>,
    open_value: Accessor<T>,
    high_value: Accessor<T>,
    low_value: Accessor<T>,
    close_value: Accessor<T>,
    decorate: Option<Decorate<T>>,
    config: CandleConfig,
}

impl CandlestickSeries<Candle> {
    /// Series reading timestamp, high, low, open and close from [`Candle`].
    pub fn for_candles(config: CandleConfig) -> Self {
        Self::new(config)
            .cross_value(|c: &Candle| c.timestamp.as_f64())
            .high_value(|c: &Candle| c.ohlcv.high.value())
            .low_value(|c: &Candle| c.ohlcv.low.value())
            .open_value(|c: &Candle| c.ohlcv.open.value())
            .close_value(|c: &Candle| c.ohlcv.close.value())
    }
}

impl<T: 'static> CandlestickSeries<T> {
    /// Every accessor starts out returning NaN, so nothing draws until they
    /// are configured.
    pub fn new(config: CandleConfig) -> Self {
        Self {
            cross_value: Box::new(|_: &T| f64::NAN),
            open_value: Box::new(|_: &T| f64::NAN),
            high_value: Box::new(|_: &T| f64::NAN),
            low_value: Box::new(|_: &T| f64::NAN),
            close_value: Box::new(|_: &T| f64::NAN),
            decorate: None,
            config,
        }
    }

    pub fn cross_value(mut self, accessor: impl Fn(&T) -> f64 + 'static) -> Self {
        self.cross_value = Box::new(accessor);
        self
    }

    pub fn open_value(mut self, accessor: impl Fn(&T) -> f64 + 'static) -> Self {
        self.open_value = Box::new(accessor);
        self
    }

    pub fn high_value(mut self, accessor: impl Fn(&T) -> f64 + 'static) -> Self {
        self.high_value = Box::new(accessor);
        self
    }

    pub fn low_value(mut self, accessor: impl Fn(&T) -> f64 + 'static) -> Self {
        self.low_value = Box::new(accessor);
        self
    }

    pub fn close_value(mut self, accessor: impl Fn(&T) -> f64 + 'static) -> Self {
        self.close_value = Box::new(accessor);
        self
    }

    /// Hook run for each candle after colours are set and before the path is
    /// filled and stroked.
    pub fn decorate(
        mut self,
        decorate: impl Fn(&mut dyn DrawingSurface, &T, usize) + 'static,
    ) -> Self {
        self.decorate = Some(Box::new(decorate));
        self
    }

    /// Pixel geometry for every datum whose values are all finite.
    pub fn glyphs(&self, data: &[T], scales: &ChartScales) -> Vec<(usize, CandleGlyph)> {
        let crosses: Vec<Option<f64>> = data
            .iter()
            .map(|d| scales.x.apply((self.cross_value)(d)).filter(|x| x.is_finite()))
            .collect();
        let width = auto_bandwidth(
            &crosses.iter().flatten().copied().collect::<Vec<_>>(),
            self.config.width_fraction,
        );

        data.iter()
            .zip(crosses)
            .enumerate()
            .filter_map(|(i, (d, cross))| {
                let open_price = (self.open_value)(d);
                let close_price = (self.close_value)(d);
                let glyph = CandleGlyph {
                    cross: cross?,
                    open: scales.y.apply(open_price)?,
                    high: scales.y.apply((self.high_value)(d))?,
                    low: scales.y.apply((self.low_value)(d))?,
                    close: scales.y.apply(close_price)?,
                    width,
                    direction: direction(open_price, close_price),
                };
                let finite = [glyph.open, glyph.high, glyph.low, glyph.close]
                    .iter()
                    .all(|v| v.is_finite());
                finite.then_some((i, glyph))
            })
            .collect()
    }

    fn color(&self, direction: Direction) -> &str {
        match direction {
            Direction::Up => &self.config.up_color,
            Direction::Down => &self.config.down_color,
            Direction::Unchanged => &self.config.unchanged_color,
        }
    }

    /// Clear the surface and paint every candle; returns the glyph count.
    pub fn draw(
        &self,
        surface: &mut dyn DrawingSurface,
        data: &[T],
        scales: &ChartScales,
    ) -> RenderingResult<usize> {
        surface.clear();
        if !scales.is_defined() {
            return Ok(0);
        }

        let glyphs = self.glyphs(data, scales);
        for (index, glyph) in &glyphs {
            surface.save();
            surface.translate(glyph.cross, glyph.high);
            surface.begin_path();
            trace_candle(surface, glyph);

            let color = self.color(glyph.direction);
            surface.set_stroke_style(color);
            surface.set_fill_style(color);
            surface.set_line_width(self.config.line_width);
            if let Some(decorate) = &self.decorate {
                decorate(surface, &data[*index], *index);
            }
            surface.fill();
            surface.stroke();
            surface.restore();
        }

        if glyphs.len() < data.len() {
            get_logger().debug(
                LogComponent::Infrastructure("CandleRenderer"),
                &format!("skipped {} candles with undefined values", data.len() - glyphs.len()),
            );
        }

        Ok(glyphs.len())
    }
}

fn direction(open: f64, close: f64) -> Direction {
    if close > open {
        Direction::Up
    } else if close < open {
        Direction::Down
    } else {
        Direction::Unchanged
    }
}

/// Body rectangle plus upper and lower wicks, with the origin at (cross, high).
fn trace_candle(surface: &mut dyn DrawingSurface, glyph: &CandleGlyph) {
    let open = glyph.open - glyph.high;
    let close = glyph.close - glyph.high;
    let low = glyph.low - glyph.high;
    let half_width = glyph.width / 2.0;

    surface.rect(-half_width, open, glyph.width, close - open);
    surface.move_to(0.0, open.min(close));
    surface.line_to(0.0, 0.0);
    surface.move_to(0.0, open.max(close));
    surface.line_to(0.0, low);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::SurfaceSize;
    use crate::domain::market_data::{OHLCV, Price, Timestamp, Volume};

    fn candle(t: u64, o: f64, h: f64, l: f64, c: f64) -> Candle {
        Candle::new(
            Timestamp::from_millis(t),
            OHLCV::new(
                Price::from(o),
                Price::from(h),
                Price::from(l),
                Price::from(c),
                Volume::from(1.0),
            ),
        )
    }

    #[test]
    fn glyph_geometry_follows_scales() {
        let data = vec![candle(0, 10.0, 20.0, 0.0, 15.0), candle(100, 15.0, 18.0, 5.0, 8.0)];
        let mut scales = ChartScales::from_candles(&data);
        scales.measure(SurfaceSize::new(200.0, 100.0));

        let series = CandlestickSeries::for_candles(CandleConfig::default());
        let glyphs = series.glyphs(&data, &scales);

        assert_eq!(glyphs.len(), 2);
        let (_, first) = glyphs[0];
        assert_eq!(first.cross, 0.0);
        assert_eq!(first.high, 0.0);
        assert_eq!(first.low, 100.0);
        assert_eq!(first.open, 50.0);
        assert_eq!(first.width, 150.0);
        assert_eq!(first.direction, Direction::Up);
        assert_eq!(glyphs[1].1.direction, Direction::Down);
    }

    #[test]
    fn unconfigured_accessors_draw_nothing() {
        let data = vec![candle(0, 1.0, 2.0, 0.5, 1.5), candle(1, 1.0, 2.0, 0.5, 1.5)];
        let scales = ChartScales::from_candles(&data);
        let series: CandlestickSeries<Candle> = CandlestickSeries::new(CandleConfig::default());
        assert!(series.glyphs(&data, &scales).is_empty());
    }
}
