pub mod axis_renderer;
pub mod candle_renderer;
pub mod canvas_surface;
pub mod recording_surface;

pub use axis_renderer::{XAxisRenderer, YAxisRenderer};
pub use candle_renderer::{CandleGlyph, CandlestickSeries};
pub use canvas_surface::CanvasSurface;
pub use recording_surface::{DrawCommand, RecordingSurface};
