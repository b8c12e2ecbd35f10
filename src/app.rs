use gloo::events::EventListener;
use gloo::render::{AnimationFrame, request_animation_frame};
use leptos::html::Canvas;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    application::{ChartCoordinator, ChartSurfaces, GenerateDataUseCase},
    config::ChartConfig,
    domain::{
        chart::SurfaceKind,
        logging::{LogComponent, get_time_provider},
        market_data::Candle,
    },
    infrastructure::rendering::CanvasSurface,
    log_error,
};

type SharedCoordinator = Rc<RefCell<Option<ChartCoordinator<CanvasSurface>>>>;
type PendingFrame = Rc<RefCell<Option<AnimationFrame>>>;

/// Candlestick chart with price and time axes
#[component]
pub fn App(#[prop(optional)] config: Option<ChartConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();

    view! {
        <style>
            {r#"
            html, body {
                margin: 0;
                height: 100%;
            }

            .chart-app {
                display: flex;
                flex-direction: column;
                height: 100vh;
                font-family: 'Lexend Deca', sans-serif;
            }

            .chart-group {
                display: flex;
                flex-direction: column;
                flex: 1 1 0;
                min-height: 0;
            }

            .chart-row {
                display: flex;
                flex-direction: row;
                flex: 1 1 0;
                min-height: 0;
                width: 100%;
            }

            .candle-canvas {
                display: block;
                min-width: 0;
                min-height: 0;
            }

            .x-axis-canvas {
                width: 100%;
                height: 2em;
            }

            .chart-toolbar {
                display: flex;
                gap: 12px;
                align-items: center;
                padding: 6px 12px;
                font-size: 12px;
            }
            "#}
        </style>
        <div class="chart-app">
            <ChartContainer config=config />
        </div>
    }
}

/// Three canvases in a responsive flex layout, redrawn on resize and on data
/// change.
#[component]
fn ChartContainer(config: ChartConfig) -> impl IntoView {
    let use_case = Rc::new(GenerateDataUseCase::new(config.data.clone()));
    let (candles, set_candles) = create_signal::<Vec<Candle>>(use_case.execute());
    let (status, set_status) = create_signal("Initializing...".to_string());

    let candles_ref = create_node_ref::<Canvas>();
    let y_axis_ref = create_node_ref::<Canvas>();
    let x_axis_ref = create_node_ref::<Canvas>();

    let coordinator: SharedCoordinator = Rc::new(RefCell::new(None));
    let frame: PendingFrame = Rc::new(RefCell::new(None));

    // Build the coordinator once every canvas is mounted
    {
        let coordinator = coordinator.clone();
        let frame = frame.clone();
        let config = config.clone();
        create_effect(move |_| {
            let (Some(candles_el), Some(y_axis_el), Some(x_axis_el)) =
                (candles_ref.get(), y_axis_ref.get(), x_axis_ref.get())
            else {
                return;
            };
            if coordinator.borrow().is_some() {
                return;
            }

            let surfaces = CanvasSurface::new((*candles_el).clone()).and_then(|candles| {
                Ok(ChartSurfaces::new(
                    candles,
                    CanvasSurface::new((*y_axis_el).clone())?,
                    CanvasSurface::new((*x_axis_el).clone())?,
                ))
            });

            match surfaces {
                Ok(surfaces) => {
                    let offset = get_time_provider().utc_offset_minutes();
                    let mut chart = ChartCoordinator::new(surfaces, &config, offset);
                    chart.set_data(candles.get_untracked());
                    *coordinator.borrow_mut() = Some(chart);
                    schedule_redraw(&coordinator, &frame, set_status);
                }
                Err(e) => {
                    log_error!(
                        LogComponent::Presentation("ChartContainer"),
                        "Canvas setup failed: {}",
                        e
                    );
                    set_status.set(format!("❌ {}", e));
                }
            }
        });
    }

    // Data changes rebuild the scales and repaint
    {
        let coordinator = coordinator.clone();
        let frame = frame.clone();
        create_effect(move |_| {
            let data = candles.get();
            let mounted = match coordinator.try_borrow_mut() {
                Ok(mut guard) => match guard.as_mut() {
                    Some(chart) => {
                        chart.set_data(data);
                        true
                    }
                    None => false,
                },
                Err(_) => false,
            };
            if mounted {
                schedule_redraw(&coordinator, &frame, set_status);
            }
        });
    }

    // Window resizes re-measure every surface
    if let Some(window) = web_sys::window() {
        let coordinator = coordinator.clone();
        let frame = frame.clone();
        let listener = EventListener::new(&window, "resize", move |_| {
            schedule_redraw(&coordinator, &frame, set_status);
        });
        on_cleanup(move || drop(listener));
    }

    let regenerate = {
        let use_case = use_case.clone();
        move |_| set_candles.set(use_case.execute())
    };

    let candles_flex = format!("flex: {} 1 0;", config.layout.candles_flex);
    let y_axis_flex = format!("flex: {} 1 0;", config.layout.y_axis_flex);
    let candles_id = SurfaceKind::Candles.element_id().to_string();
    let y_axis_id = SurfaceKind::YAxis.element_id().to_string();
    let x_axis_id = SurfaceKind::XAxis.element_id().to_string();

    view! {
        <div id="chart_group" class="chart-group">
            <div class="chart-row">
                <canvas
                    id=candles_id
                    class="candle-canvas"
                    style=candles_flex
                    node_ref=candles_ref
                />
                <canvas
                    id=y_axis_id
                    class="candle-canvas"
                    style=y_axis_flex
                    node_ref=y_axis_ref
                />
            </div>
            <canvas
                id=x_axis_id
                class="candle-canvas x-axis-canvas"
                node_ref=x_axis_ref
            />
        </div>
        <div class="chart-toolbar">
            <button on:click=regenerate>"Regenerate"</button>
            <span>{move || status.get()}</span>
        </div>
    }
}

/// Queue a full measure + draw on the next animation frame. A frame that is
/// still pending is cancelled and replaced.
fn schedule_redraw(
    coordinator: &SharedCoordinator,
    frame: &PendingFrame,
    set_status: WriteSignal<String>,
) {
    if let Ok(mut guard) = coordinator.try_borrow_mut() {
        match guard.as_mut() {
            Some(chart) => chart.request_redraw(),
            None => return,
        }
    }

    let coordinator = coordinator.clone();
    let handle = request_animation_frame(move |_| {
        let Ok(mut guard) = coordinator.try_borrow_mut() else {
            return;
        };
        if let Some(report) = guard.as_mut().and_then(|chart| chart.flush()) {
            if report.skipped {
                set_status.set("No data to draw".to_string());
            } else {
                set_status.set(format!("✅ Rendered {} candles", report.candles));
            }
        }
    });

    if let Ok(mut pending) = frame.try_borrow_mut() {
        *pending = Some(handle);
    }
}
