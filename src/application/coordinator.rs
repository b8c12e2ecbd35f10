use strum::IntoEnumIterator;

use crate::config::ChartConfig;
use crate::domain::{
    chart::{ChartScales, DrawingSurface, SurfaceKind, SurfaceSize},
    errors::RenderingResult,
    events::{ChartEvent, EventDispatcher, InMemoryEventDispatcher},
    logging::{LogComponent, get_logger},
    market_data::{Candle, CandleSeries},
};
use crate::infrastructure::rendering::{CandlestickSeries, XAxisRenderer, YAxisRenderer};
use crate::{log_debug, log_warn};

/// The three surfaces of a chart: candles, price strip and time strip
#[derive(Debug, Clone)]
pub struct ChartSurfaces<S> {
    pub candles: S,
    pub y_axis: S,
    pub x_axis: S,
}

impl<S> ChartSurfaces<S> {
    pub fn new(candles: S, y_axis: S, x_axis: S) -> Self {
        Self { candles, y_axis, x_axis }
    }

    pub fn get(&self, kind: SurfaceKind) -> &S {
        match kind {
            SurfaceKind::Candles => &self.candles,
            SurfaceKind::YAxis => &self.y_axis,
            SurfaceKind::XAxis => &self.x_axis,
        }
    }

    pub fn get_mut(&mut self, kind: SurfaceKind) -> &mut S {
        match kind {
            SurfaceKind::Candles => &mut self.candles,
            SurfaceKind::YAxis => &mut self.y_axis,
            SurfaceKind::XAxis => &mut self.x_axis,
        }
    }
}

/// What one redraw painted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RedrawReport {
    pub candles: usize,
    pub y_labels: usize,
    pub x_labels: usize,
    /// Scales were undefined, so nothing but clears was issued.
    pub skipped: bool,
}

/// Owns data, scales and surfaces; turns change notifications into
/// measure + draw passes.
pub struct ChartCoordinator<S: DrawingSurface> {
    surfaces: ChartSurfaces<S>,
    series: CandleSeries,
    scales: ChartScales,
    candlestick: CandlestickSeries<Candle>,
    x_axis: XAxisRenderer,
    y_axis: YAxisRenderer,
    redraw_pending: bool,
    dispatcher: InMemoryEventDispatcher,
}

impl<S: DrawingSurface> ChartCoordinator<S> {
    pub fn new(surfaces: ChartSurfaces<S>, config: &ChartConfig, utc_offset_minutes: i32) -> Self {
        get_logger().info(
            LogComponent::Application("ChartCoordinator"),
            "Creating new chart coordinator",
        );

        Self {
            surfaces,
            series: CandleSeries::default(),
            scales: ChartScales::default(),
            candlestick: CandlestickSeries::for_candles(config.candles.clone()),
            x_axis: XAxisRenderer::new(config.x_axis.clone(), utc_offset_minutes),
            y_axis: YAxisRenderer::new(config.y_axis.clone()),
            redraw_pending: false,
            dispatcher: InMemoryEventDispatcher::new(),
        }
    }

    /// Replace the candle series used for the candlestick glyphs.
    pub fn with_candlestick(mut self, candlestick: CandlestickSeries<Candle>) -> Self {
        self.candlestick = candlestick;
        self
    }

    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: Fn(&ChartEvent) + 'static,
    {
        self.dispatcher.subscribe_to_chart_events(handler);
    }

    pub fn candles(&self) -> &[Candle] {
        self.series.get_candles()
    }

    pub fn scales(&self) -> &ChartScales {
        &self.scales
    }

    pub fn surfaces(&self) -> &ChartSurfaces<S> {
        &self.surfaces
    }

    pub fn is_redraw_pending(&self) -> bool {
        self.redraw_pending
    }

    pub fn set_utc_offset(&mut self, utc_offset_minutes: i32) {
        self.x_axis.set_utc_offset(utc_offset_minutes);
        self.request_redraw();
    }

    /// Replace the data set and rebuild both scale domains.
    pub fn set_data(&mut self, candles: Vec<Candle>) {
        let previous = self.series.replace(candles);
        self.scales.rebuild(self.series.get_candles());

        log_debug!(
            LogComponent::Application("ChartCoordinator"),
            "data replaced: {} -> {} candles",
            previous,
            self.series.count()
        );

        self.dispatcher.publish_chart_event(ChartEvent::DataChanged {
            candle_count: self.series.count(),
        });
        self.request_redraw();
    }

    /// Force a size onto one surface.
    pub fn resize(&mut self, kind: SurfaceKind, size: SurfaceSize) {
        self.surfaces.get_mut(kind).set_size(size);
        if kind == SurfaceKind::Candles {
            self.scales.measure(size);
        }
        self.request_redraw();
    }

    /// Mark the chart dirty. Repeated requests before the next flush collapse
    /// into one redraw.
    pub fn request_redraw(&mut self) {
        if !self.redraw_pending {
            self.redraw_pending = true;
            self.dispatcher.publish_chart_event(ChartEvent::RedrawRequested);
        }
    }

    /// Run the pending redraw, if any.
    pub fn flush(&mut self) -> Option<RedrawReport> {
        if self.redraw_pending { Some(self.redraw()) } else { None }
    }

    /// Measure every surface, then draw every surface.
    pub fn redraw(&mut self) -> RedrawReport {
        self.redraw_pending = false;

        for kind in SurfaceKind::iter() {
            let size = self.surfaces.get(kind).measure();
            self.handle(ChartEvent::Measure { kind, size });
        }

        let mut report = RedrawReport { skipped: !self.scales.is_defined(), ..Default::default() };
        for kind in SurfaceKind::iter() {
            let painted = self.draw(kind).unwrap_or_else(|e| {
                log_warn!(
                    LogComponent::Application("ChartCoordinator"),
                    "dropped {} frame: {}",
                    kind,
                    e
                );
                0
            });
            match kind {
                SurfaceKind::Candles => report.candles = painted,
                SurfaceKind::YAxis => report.y_labels = painted,
                SurfaceKind::XAxis => report.x_labels = painted,
            }
        }

        log_debug!(
            LogComponent::Application("ChartCoordinator"),
            "redraw: {} candles, {} y labels, {} x labels",
            report.candles,
            report.y_labels,
            report.x_labels
        );
        report
    }

    /// React to one lifecycle event.
    pub fn handle(&mut self, event: ChartEvent) {
        match &event {
            ChartEvent::Measure { kind, size } => {
                let surface = self.surfaces.get_mut(*kind);
                if surface.size() != *size {
                    surface.set_size(*size);
                }
                if *kind == SurfaceKind::Candles {
                    self.scales.measure(*size);
                }
            }
            ChartEvent::Draw { kind } => {
                if let Err(e) = self.draw(*kind) {
                    log_warn!(
                        LogComponent::Application("ChartCoordinator"),
                        "dropped {} frame: {}",
                        kind,
                        e
                    );
                }
            }
            ChartEvent::DataChanged { .. } | ChartEvent::RedrawRequested => self.request_redraw(),
        }
        self.dispatcher.publish_chart_event(event);
    }

    fn draw(&mut self, kind: SurfaceKind) -> RenderingResult<usize> {
        let Self { surfaces, series, scales, candlestick, x_axis, y_axis, .. } = self;
        let surface = surfaces.get_mut(kind);
        match kind {
            SurfaceKind::Candles => candlestick.draw(surface, series.get_candles(), scales),
            SurfaceKind::YAxis => y_axis.draw(surface, &scales.y),
            SurfaceKind::XAxis => x_axis.draw(surface, &scales.x),
        }
    }
}
