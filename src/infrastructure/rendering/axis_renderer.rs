use crate::config::{XAxisConfig, YAxisConfig};
use crate::domain::{
    chart::{DrawingSurface, LinearScale, TextAlign, TextBaseline},
    errors::RenderingResult,
    logging::LogComponent,
};
use crate::log_trace;
use crate::time_utils::{format_month_day, format_price_tick};

/// Date labels along the bottom strip
#[derive(Debug, Clone)]
pub struct XAxisRenderer {
    config: XAxisConfig,
    utc_offset_minutes: i32,
}

impl XAxisRenderer {
    pub fn new(config: XAxisConfig, utc_offset_minutes: i32) -> Self {
        Self { config, utc_offset_minutes }
    }

    pub fn set_utc_offset(&mut self, utc_offset_minutes: i32) {
        self.utc_offset_minutes = utc_offset_minutes;
    }

    pub fn tick_count(&self) -> usize {
        self.config.tick_count
    }

    /// Label text for one tick value.
    pub fn label(&self, tick: f64) -> String {
        format_month_day(tick, self.utc_offset_minutes)
    }

    /// Paint one label per tick; returns how many were painted.
    pub fn draw(
        &self,
        surface: &mut dyn DrawingSurface,
        scale: &LinearScale,
    ) -> RenderingResult<usize> {
        surface.clear();
        if !scale.is_defined() {
            return Ok(0);
        }

        let y = self.config.offset + self.config.tick_size;
        let mut painted = 0;

        for tick in scale.ticks(self.config.tick_count) {
            let Some(x) = scale.apply(tick) else { continue };

            surface.save();
            surface.set_text_align(TextAlign::Center);
            surface.set_text_baseline(TextBaseline::Top);
            surface.set_fill_style(&self.config.color);
            surface.set_font(&self.config.font);
            surface.begin_path();
            surface.fill_text(&self.label(tick), x, y)?;
            surface.restore();
            painted += 1;
        }

        log_trace!(LogComponent::Infrastructure("XAxisRenderer"), "painted {} labels", painted);
        Ok(painted)
    }
}

/// Price labels in the right-hand strip
#[derive(Debug, Clone)]
pub struct YAxisRenderer {
    config: YAxisConfig,
}

impl YAxisRenderer {
    pub fn new(config: YAxisConfig) -> Self {
        Self { config }
    }

    pub fn tick_count(&self) -> usize {
        self.config.tick_count
    }

    pub fn draw(
        &self,
        surface: &mut dyn DrawingSurface,
        scale: &LinearScale,
    ) -> RenderingResult<usize> {
        surface.clear();
        if !scale.is_defined() {
            return Ok(0);
        }

        surface.set_text_align(TextAlign::Center);
        surface.set_text_baseline(TextBaseline::Middle);
        surface.set_fill_style(&self.config.color);
        surface.set_font(&self.config.font);

        let mut painted = 0;
        for tick in scale.ticks(self.config.tick_count) {
            let Some(y) = scale.apply(tick) else { continue };
            surface.begin_path();
            surface.fill_text(&format_price_tick(tick), self.config.offset, y)?;
            painted += 1;
        }

        log_trace!(LogComponent::Infrastructure("YAxisRenderer"), "painted {} labels", painted);
        Ok(painted)
    }
}
