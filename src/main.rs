//! Todos Frontend Entry Point

mod api;
mod app;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod models;
mod row_state;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    if let Err(e) = console_logger::init_logger("Todos", config.level_filter()) {
        web_sys::console::warn_1(&format!("logger init failed: {}", e).into());
    }
    if let Some(e) = config_error {
        log::warn!("{}, using defaults", e);
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
