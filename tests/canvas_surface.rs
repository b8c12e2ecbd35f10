#![cfg(target_arch = "wasm32")]
use candle_chart_wasm::application::{ChartCoordinator, ChartSurfaces};
use candle_chart_wasm::config::ChartConfig;
use candle_chart_wasm::domain::chart::{DrawingSurface, SurfaceKind, SurfaceSize};
use candle_chart_wasm::domain::market_data::RandomFinancial;
use candle_chart_wasm::infrastructure::rendering::CanvasSurface;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn attach_canvas(id: &str, width: u32, height: u32) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = document.create_element("canvas").unwrap().dyn_into().unwrap();
    canvas.set_id(id);
    let style = format!("width: {}px; height: {}px; display: block;", width, height);
    canvas.set_attribute("style", &style).unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn measure_reads_the_css_size() {
    attach_canvas("measure-test", 320, 120);
    let surface = CanvasSurface::from_element_id("measure-test").unwrap();
    assert_eq!(surface.measure(), SurfaceSize::new(320.0, 120.0));
}

#[wasm_bindgen_test]
fn missing_canvas_is_an_error() {
    assert!(CanvasSurface::from_element_id("no-such-canvas").is_err());
}

#[wasm_bindgen_test]
fn coordinator_sizes_the_backing_store() {
    let surfaces = ChartSurfaces::new(
        CanvasSurface::new(attach_canvas(SurfaceKind::Candles.element_id(), 600, 300)).unwrap(),
        CanvasSurface::new(attach_canvas(SurfaceKind::YAxis.element_id(), 40, 300)).unwrap(),
        CanvasSurface::new(attach_canvas(SurfaceKind::XAxis.element_id(), 640, 24)).unwrap(),
    );
    let mut chart = ChartCoordinator::new(surfaces, &ChartConfig::default(), 0);
    chart.set_data(RandomFinancial::new(0, 1).generate(50));

    let report = chart.flush().unwrap();
    assert_eq!(report.candles, 50);
    assert_eq!(chart.surfaces().candles.canvas().width(), 600);
    assert_eq!(chart.surfaces().candles.canvas().height(), 300);
    assert_eq!(chart.surfaces().x_axis.size(), SurfaceSize::new(640.0, 24.0));
}
