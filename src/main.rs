//! Food Reels Frontend Entry Point

mod commands;
mod context;
mod store;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;
use reels_core::AppConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    if let Err(e) = rolling_logger::init_logger("FoodReels", config.log_level) {
        web_sys::console::warn_1(&format!("[main] logger: {}", e).into());
    }

    let api = config.api.or_origin(&commands::history::origin());
    if let Err(e) = commands::init_api(api) {
        log::error!("[main] cannot start without a gateway: {}", e);
        return;
    }

    mount_to_body(App);
}
