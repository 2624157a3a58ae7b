use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

/// Install the panic hook, console logger and browser clock.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = if cfg!(debug_assertions) {
        infrastructure::services::ConsoleLogger::new_development()
    } else {
        infrastructure::services::ConsoleLogger::new_production()
    };
    let level = console_logger.min_level();
    domain::logging::init_logger(Box::new(console_logger));
    domain::logging::set_max_level(level);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    get_logger().info(LogComponent::Presentation("Initialize"), "motion charts initialized");
}

/// Mount the demo page (background plus the chart gallery) on `<body>`.
#[wasm_bindgen(js_name = mountDemo)]
pub fn mount_demo() {
    leptos::mount_to_body(app::App);
}
