//! Chart configuration.
//!
//! Every field has a default matching the stock chart; a JSON document may
//! override any subset of them.

use serde::{Deserialize, Serialize};

use crate::domain::chart::{Color, DEFAULT_TICK_COUNT, DEFAULT_WIDTH_FRACTION};
use crate::domain::errors::ConfigResult;
use crate::domain::market_data::DAY_MS;

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub data: DataConfig,
    pub x_axis: XAxisConfig,
    pub y_axis: YAxisConfig,
    pub candles: CandleConfig,
    pub layout: LayoutConfig,
}

impl ChartConfig {
    /// Parse a (possibly partial) JSON document on top of the defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Synthetic data settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub candle_count: usize,
    pub start_price: f64,
    pub interval_ms: u64,
    pub mu: f64,
    pub sigma: f64,
    pub steps: usize,
    /// Fixed seed; `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            candle_count: 50,
            start_price: 100.0,
            interval_ms: DAY_MS,
            mu: 0.1,
            sigma: 0.1,
            steps: 20,
            seed: None,
        }
    }
}

/// Time axis label settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XAxisConfig {
    pub font: String,
    pub color: String,
    /// Vertical offset of the label row.
    pub offset: f64,
    pub tick_size: f64,
    pub tick_count: usize,
}

impl Default for XAxisConfig {
    fn default() -> Self {
        Self {
            font: "50 11.5px Lexend Deca".to_string(),
            color: "black".to_string(),
            offset: 3.0,
            tick_size: 6.0,
            tick_count: DEFAULT_TICK_COUNT,
        }
    }
}

/// Price axis label settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YAxisConfig {
    pub font: String,
    pub color: String,
    /// Horizontal position of the label column.
    pub offset: f64,
    pub tick_count: usize,
}

impl Default for YAxisConfig {
    fn default() -> Self {
        Self {
            font: "12.425px Lexend Deca".to_string(),
            color: "black".to_string(),
            offset: 20.0,
            tick_count: DEFAULT_TICK_COUNT,
        }
    }
}

/// Candlestick glyph settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandleConfig {
    pub width_fraction: f64,
    /// Stroke width of wicks and body outlines.
    pub line_width: f64,
    pub up_color: String,
    pub down_color: String,
    pub unchanged_color: String,
}

impl Default for CandleConfig {
    fn default() -> Self {
        Self {
            width_fraction: DEFAULT_WIDTH_FRACTION,
            line_width: 1.0,
            up_color: Color::from_hex(0x66cc00).to_css(),
            down_color: Color::from_hex(0xcc6600).to_css(),
            unchanged_color: Color::BLACK.to_css(),
        }
    }
}

/// Flex ratios of the surfaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub candles_flex: u32,
    pub y_axis_flex: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { candles_flex: 15, y_axis_flex: 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{"data": {"candle_count": 12, "seed": 3}}"#;
        let config = ChartConfig::from_json(json).unwrap();
        assert_eq!(config.data.candle_count, 12);
        assert_eq!(config.data.seed, Some(3));
        assert_eq!(config.x_axis, XAxisConfig::default());
        assert_eq!(config.layout.candles_flex, 15);
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = ChartConfig::from_json("{").unwrap_err();
        assert!(matches!(err, crate::domain::errors::AppError::ConfigError(_)));
    }
}
