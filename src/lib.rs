use leptos::*;
use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;

pub use app::App;

/// Install the browser logger, clock and panic hook
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new_development());
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    get_logger().info(LogComponent::Presentation("Initialize"), "🚀 Candle chart initialized");
}

/// Mount the chart application into `<body>`
#[wasm_bindgen(js_name = mountApp)]
pub fn mount_app() {
    mount_to_body(|| view! { <App /> });
}

/// Mount the chart application with a JSON configuration. Missing fields
/// keep their defaults.
#[wasm_bindgen(js_name = mountAppWithConfig)]
pub fn mount_app_with_config(config_json: &str) -> Result<(), JsValue> {
    let config = config::ChartConfig::from_json(config_json)?;
    mount_to_body(move || {
        let config = config.clone();
        view! { <App config=config /> }
    });
    Ok(())
}
