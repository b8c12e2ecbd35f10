use super::value_objects::{SurfaceSize, TextAlign, TextBaseline};
use crate::domain::errors::RenderingResult;

/// Minimal 2D drawing API the renderers paint through.
///
/// Mirrors the subset of `CanvasRenderingContext2d` the chart needs, so the
/// same renderers drive a browser canvas or an in-memory recorder.
pub trait DrawingSurface {
    fn size(&self) -> SurfaceSize;

    /// Size the surface should take on the next measure pass. Surfaces laid
    /// out by someone else (a DOM element) report that layout here.
    fn measure(&self) -> SurfaceSize {
        self.size()
    }

    /// Resize the backing store. Resizing clears the surface.
    fn set_size(&mut self, size: SurfaceSize);

    fn clear(&mut self);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill(&mut self);
    fn stroke(&mut self);

    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> RenderingResult<()>;
}
