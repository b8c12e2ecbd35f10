use std::cell::Cell;
use std::rc::Rc;

use candle_chart_wasm::application::{ChartCoordinator, ChartSurfaces};
use candle_chart_wasm::config::ChartConfig;
use candle_chart_wasm::domain::chart::{Color, DrawingSurface, SurfaceKind, SurfaceSize};
use candle_chart_wasm::domain::events::ChartEvent;
use candle_chart_wasm::domain::market_data::{
    Candle, OHLCV, Price, RandomFinancial, Timestamp, Volume,
};
use candle_chart_wasm::infrastructure::rendering::{
    CandlestickSeries, DrawCommand, RecordingSurface,
};
use candle_chart_wasm::time_utils::{format_month_day, format_price_tick};
use wasm_bindgen_test::*;

const START: u64 = 1_700_000_000_000;

fn surfaces() -> ChartSurfaces<RecordingSurface> {
    ChartSurfaces::new(
        RecordingSurface::new(800.0, 400.0),
        RecordingSurface::new(50.0, 400.0),
        RecordingSurface::new(850.0, 30.0),
    )
}

fn chart_with(candles: Vec<Candle>) -> ChartCoordinator<RecordingSurface> {
    let mut chart = ChartCoordinator::new(surfaces(), &ChartConfig::default(), 0);
    chart.set_data(candles);
    chart
}

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

#[wasm_bindgen_test(unsupported = test)]
fn fifty_candles_paint_every_surface() {
    let mut chart = chart_with(RandomFinancial::new(START, 42).generate(50));
    let report = chart.redraw();

    let scales = chart.scales().clone();
    assert!(!report.skipped);
    assert_eq!(report.candles, 50);
    assert_eq!(chart.surfaces().candles.rect_count(), 50);
    assert_eq!(report.y_labels, scales.y.ticks(10).len());
    assert_eq!(report.x_labels, scales.x.ticks(10).len());
    assert_eq!(chart.surfaces().y_axis.texts().len(), report.y_labels);
    assert_eq!(chart.surfaces().x_axis.texts().len(), report.x_labels);
}

#[wasm_bindgen_test(unsupported = test)]
fn redraw_measures_the_candle_surface() {
    let mut chart = chart_with(RandomFinancial::new(START, 1).generate(10));
    chart.redraw();

    assert_eq!(chart.scales().x.range(), (0.0, 800.0));
    assert_eq!(chart.scales().y.range(), (400.0, 0.0));
}

#[wasm_bindgen_test(unsupported = test)]
fn resize_is_picked_up_by_the_next_redraw() {
    let mut chart = chart_with(RandomFinancial::new(START, 1).generate(10));
    chart.redraw();
    chart.resize(SurfaceKind::Candles, SurfaceSize::new(1000.0, 500.0));

    assert!(chart.is_redraw_pending());
    chart.flush();
    assert_eq!(chart.surfaces().candles.size(), SurfaceSize::new(1000.0, 500.0));
    assert_eq!(chart.scales().x.range(), (0.0, 1000.0));
    assert_eq!(chart.scales().y.range(), (500.0, 0.0));
}

#[wasm_bindgen_test(unsupported = test)]
fn repeated_redraws_are_identical() {
    let mut chart = chart_with(RandomFinancial::new(START, 9).generate(50));
    chart.redraw();
    let first = frames(&chart);
    chart.redraw();
    let second = frames(&chart);

    assert!(!first[0].is_empty());
    assert_eq!(first, second);
}

fn frames(chart: &ChartCoordinator<RecordingSurface>) -> Vec<Vec<DrawCommand>> {
    [SurfaceKind::Candles, SurfaceKind::YAxis, SurfaceKind::XAxis]
        .iter()
        .map(|kind| chart.surfaces().get(*kind).frame().to_vec())
        .collect()
}

#[wasm_bindgen_test(unsupported = test)]
fn empty_data_draws_nothing() {
    let mut chart = chart_with(Vec::new());
    let report = chart.redraw();

    assert!(report.skipped);
    assert_eq!((report.candles, report.y_labels, report.x_labels), (0, 0, 0));
    for kind in [SurfaceKind::Candles, SurfaceKind::YAxis, SurfaceKind::XAxis] {
        assert!(chart.surfaces().get(kind).frame().is_empty());
        assert!(chart.surfaces().get(kind).commands().contains(&DrawCommand::Clear));
    }
}

#[wasm_bindgen_test(unsupported = test)]
fn new_data_replaces_the_old_frame() {
    let mut chart = chart_with(RandomFinancial::new(START, 3).generate(50));
    chart.redraw();
    chart.set_data(RandomFinancial::new(START, 3).generate(5));
    let report = chart.flush().expect("set_data requests a redraw");

    assert_eq!(report.candles, 5);
    assert_eq!(chart.surfaces().candles.rect_count(), 5);
}

#[wasm_bindgen_test(unsupported = test)]
fn labels_follow_the_ticks() {
    let day = 24 * 60 * 60 * 1000;
    let mut chart = chart_with(vec![
        candle(START, 100.0, 104.0, 99.0, 103.0),
        candle(START + day, 103.0, 106.0, 101.0, 102.0),
        candle(START + 2 * day, 102.0, 102.0, 95.0, 96.0),
    ]);
    chart.redraw();

    let scales = chart.scales().clone();
    let y_texts = chart.surfaces().y_axis.texts();
    assert_eq!(y_texts.len(), scales.y.ticks(10).len());
    for ((text, x, y), tick) in y_texts.iter().zip(scales.y.ticks(10)) {
        assert_eq!(text, &format_price_tick(tick));
        assert_eq!(*x, 20.0);
        assert_eq!(Some(*y), scales.y.apply(tick));
    }

    let x_texts = chart.surfaces().x_axis.texts();
    assert_eq!(x_texts.len(), scales.x.ticks(10).len());
    for ((text, x, y), tick) in x_texts.iter().zip(scales.x.ticks(10)) {
        assert_eq!(text, &format_month_day(tick, 0));
        assert_eq!(Some(*x), scales.x.apply(tick));
        assert_eq!(*y, 9.0);
    }
}

#[wasm_bindgen_test(unsupported = test)]
fn candles_take_their_direction_colour() {
    let mut chart = chart_with(vec![
        candle(0, 10.0, 12.0, 9.0, 11.0),
        candle(1, 11.0, 12.0, 8.0, 9.0),
        candle(2, 9.0, 10.0, 8.0, 9.0),
    ]);
    chart.redraw();

    let fills: Vec<String> = chart
        .surfaces()
        .candles
        .frame()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::FillStyle(color) => Some(color.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(fills, vec!["#66cc00", "#cc6600", "#000000"]);
}

#[wasm_bindgen_test(unsupported = test)]
fn redraw_requests_are_coalesced() {
    let requested = Rc::new(Cell::new(0));
    let mut chart = ChartCoordinator::new(surfaces(), &ChartConfig::default(), 0);
    {
        let requested = requested.clone();
        chart.subscribe(move |event| {
            if *event == ChartEvent::RedrawRequested {
                requested.set(requested.get() + 1);
            }
        });
    }

    chart.set_data(RandomFinancial::new(START, 5).generate(20));
    chart.request_redraw();
    chart.request_redraw();
    assert_eq!(requested.get(), 1);

    assert!(chart.flush().is_some());
    assert!(chart.flush().is_none());

    chart.request_redraw();
    assert_eq!(requested.get(), 2);
}

#[wasm_bindgen_test(unsupported = test)]
fn decorate_runs_between_colouring_and_painting() {
    let config = ChartConfig::default();
    let highlight = Color::BLACK.with_alpha(0.5).to_css();
    let calls = Rc::new(Cell::new(0));

    let series = {
        let calls = calls.clone();
        let highlight = highlight.clone();
        CandlestickSeries::for_candles(config.candles.clone()).decorate(
            move |surface, candle: &Candle, _index| {
                calls.set(calls.get() + 1);
                if candle.is_bullish() {
                    surface.set_fill_style(&highlight);
                }
            },
        )
    };
    let mut chart = ChartCoordinator::new(surfaces(), &config, 0).with_candlestick(series);
    chart.set_data(RandomFinancial::new(START, 21).generate(5));
    let report = chart.redraw();

    assert_eq!(report.candles, 5);
    assert_eq!(calls.get(), 5);

    let frame = chart.surfaces().candles.frame();
    let glyphs: Vec<&[DrawCommand]> = frame
        .split(|c| *c == DrawCommand::Restore)
        .filter(|segment| segment.contains(&DrawCommand::Save))
        .collect();
    assert_eq!(glyphs.len(), 5);

    for (glyph, candle) in glyphs.iter().zip(chart.candles()) {
        let position = |wanted: &DrawCommand| glyph.iter().position(|c| c == wanted);
        let fill = position(&DrawCommand::Fill).expect("glyph is filled");
        let stroke = position(&DrawCommand::Stroke).expect("glyph is stroked");
        let direction_colour = glyph
            .iter()
            .position(|c| matches!(c, DrawCommand::FillStyle(color) if *color != highlight))
            .expect("direction colour is set");
        assert!(direction_colour < fill && fill < stroke);
        assert!(glyph.contains(&DrawCommand::LineWidth(config.candles.line_width)));

        let decorated = position(&DrawCommand::FillStyle(highlight.clone()));
        if candle.is_bullish() {
            let decorated = decorated.expect("bullish candles are highlighted");
            assert!(direction_colour < decorated && decorated < fill);
        } else {
            assert_eq!(decorated, None);
        }
    }
}
