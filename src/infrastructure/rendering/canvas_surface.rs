use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::{
    chart::{DrawingSurface, SurfaceSize, TextAlign, TextBaseline},
    errors::{AppError, RenderingResult},
    logging::{LogComponent, get_logger},
};

/// Canvas 2D surface - Infrastructure implementation
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    size: SurfaceSize,
}

impl CanvasSurface {
    /// Wrap an existing canvas element.
    pub fn new(canvas: HtmlCanvasElement) -> RenderingResult<Self> {
        let context = canvas
            .get_context("2d")
            .map_err(|_| AppError::ContextUnavailable("Failed to get 2D context".to_string()))?
            .ok_or_else(|| AppError::ContextUnavailable("2D context not supported".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::ContextUnavailable("Failed to cast to 2D context".to_string()))?;

        let size = SurfaceSize::new(canvas.width() as f64, canvas.height() as f64);
        Ok(Self { canvas, context, size })
    }

    /// Look the canvas up by DOM id.
    pub fn from_element_id(canvas_id: &str) -> RenderingResult<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| AppError::ContextUnavailable("Document not available".to_string()))?;

        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| {
                AppError::ContextUnavailable(format!("Canvas element '{}' not found", canvas_id))
            })?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| {
                AppError::ContextUnavailable(format!("Element '{}' is not a canvas", canvas_id))
            })?;

        Self::new(canvas)
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl DrawingSurface for CanvasSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    /// The element's laid-out CSS size.
    fn measure(&self) -> SurfaceSize {
        SurfaceSize::new(self.canvas.client_width() as f64, self.canvas.client_height() as f64)
    }

    fn set_size(&mut self, size: SurfaceSize) {
        self.canvas.set_width(size.width.max(0.0) as u32);
        self.canvas.set_height(size.height.max(0.0) as u32);
        self.size = size;

        get_logger().trace(
            LogComponent::Infrastructure("CanvasSurface"),
            &format!("resized to {}x{}", size.width, size.height),
        );
    }

    fn clear(&mut self) {
        self.context.clear_rect(0.0, 0.0, self.size.width, self.size.height);
    }

    fn save(&mut self) {
        self.context.save();
    }

    fn restore(&mut self) {
        self.context.restore();
    }

    fn translate(&mut self, x: f64, y: f64) {
        // Only fails for non-finite input, which renderers filter out.
        let _ = self.context.translate(x, y);
    }

    fn begin_path(&mut self) {
        self.context.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.context.rect(x, y, width, height);
    }

    fn fill(&mut self) {
        self.context.fill();
    }

    fn stroke(&mut self) {
        self.context.stroke();
    }

    fn set_fill_style(&mut self, color: &str) {
        self.context.set_fill_style_str(color);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.context.set_stroke_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.context.set_line_width(width);
    }

    fn set_font(&mut self, font: &str) {
        self.context.set_font(font);
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.context.set_text_align(align.as_ref());
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.context.set_text_baseline(baseline.as_ref());
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> RenderingResult<()> {
        self.context.fill_text(text, x, y)?;
        Ok(())
    }
}
