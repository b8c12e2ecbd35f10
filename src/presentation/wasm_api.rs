use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::application::{ChartCoordinator, ChartSurfaces, GenerateDataUseCase, RedrawReport};
use crate::config::ChartConfig;
use crate::domain::{
    errors::AppError,
    logging::{LogComponent, get_logger, get_time_provider},
    market_data::Candle,
};
use crate::infrastructure::rendering::CanvasSurface;

/// Snapshot handed to JavaScript after every redraw
#[derive(Debug, Serialize)]
struct ChartStats {
    candles: usize,
    y_labels: usize,
    x_labels: usize,
    skipped: bool,
    x_domain: Option<(f64, f64)>,
    y_domain: Option<(f64, f64)>,
}

/// JavaScript handle for a chart drawn onto three existing canvases.
///
/// Drawing is synchronous; the caller decides when frames happen.
#[wasm_bindgen]
pub struct CandleChartApi {
    coordinator: ChartCoordinator<CanvasSurface>,
    use_case: GenerateDataUseCase,
    last_report: RedrawReport,
}

#[wasm_bindgen]
impl CandleChartApi {
    /// Attach to three existing canvases by element id.
    #[wasm_bindgen(constructor)]
    pub fn new(
        candles_id: &str,
        y_axis_id: &str,
        x_axis_id: &str,
    ) -> Result<CandleChartApi, JsValue> {
        Self::with_config(candles_id, y_axis_id, x_axis_id, None)
    }

    /// Same as the constructor, with an optional JSON config on top of the
    /// defaults.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(
        candles_id: &str,
        y_axis_id: &str,
        x_axis_id: &str,
        config_json: Option<String>,
    ) -> Result<CandleChartApi, JsValue> {
        let config = match config_json {
            Some(json) => ChartConfig::from_json(&json)?,
            None => ChartConfig::default(),
        };

        let surfaces = ChartSurfaces::new(
            CanvasSurface::from_element_id(candles_id)?,
            CanvasSurface::from_element_id(y_axis_id)?,
            CanvasSurface::from_element_id(x_axis_id)?,
        );
        let offset = get_time_provider().utc_offset_minutes();
        let mut coordinator = ChartCoordinator::new(surfaces, &config, offset);

        let use_case = GenerateDataUseCase::new(config.data.clone());
        coordinator.set_data(use_case.execute());

        get_logger().info(
            LogComponent::Presentation("CandleChartApi"),
            &format!("Attached to #{}, #{}, #{}", candles_id, y_axis_id, x_axis_id),
        );

        Ok(Self { coordinator, use_case, last_report: RedrawReport::default() })
    }

    /// Replace the data with `count` fresh synthetic candles.
    pub fn generate(&mut self, count: usize) {
        self.coordinator.set_data(self.use_case.execute_with_count(count));
    }

    /// Replace the data with candles supplied as a JSON array.
    #[wasm_bindgen(js_name = setCandlesJson)]
    pub fn set_candles_json(&mut self, json: &str) -> Result<usize, JsValue> {
        let candles: Vec<Candle> = serde_json::from_str(json)
            .map_err(|e| AppError::ValidationError(format!("Invalid candle JSON: {}", e)))?;
        let count = candles.len();
        self.coordinator.set_data(candles);
        Ok(count)
    }

    /// Mark the chart dirty, e.g. after the page layout changed.
    #[wasm_bindgen(js_name = requestRedraw)]
    pub fn request_redraw(&mut self) {
        self.coordinator.request_redraw();
    }

    /// Run a pending redraw. Returns whether anything was painted.
    pub fn flush(&mut self) -> bool {
        match self.coordinator.flush() {
            Some(report) => {
                self.last_report = report;
                true
            }
            None => false,
        }
    }

    /// Re-measure after the canvases were laid out again; returns the candle
    /// count drawn.
    pub fn resize(&mut self) -> usize {
        self.coordinator.request_redraw();
        self.flush();
        self.last_report.candles
    }

    /// Measure and paint every canvas now; returns the candle count drawn.
    pub fn redraw(&mut self) -> usize {
        self.last_report = self.coordinator.redraw();
        self.last_report.candles
    }

    #[wasm_bindgen(js_name = candleCount)]
    pub fn candle_count(&self) -> usize {
        self.coordinator.candles().len()
    }

    /// Result of the latest redraw plus the current scale domains, as JSON.
    #[wasm_bindgen(js_name = getChartStats)]
    pub fn get_chart_stats(&self) -> Result<String, JsValue> {
        let scales = self.coordinator.scales();
        let stats = ChartStats {
            candles: self.last_report.candles,
            y_labels: self.last_report.y_labels,
            x_labels: self.last_report.x_labels,
            skipped: self.last_report.skipped,
            x_domain: scales.x.domain(),
            y_domain: scales.y.domain(),
        };
        serde_json::to_string(&stats).map_err(|e| AppError::from(e).into())
    }
}
