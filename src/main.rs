//! Food Diary Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod filter;
mod format;
mod i18n;
mod models;
mod navigation;
mod session;
mod storage;
mod store;
mod theme;
mod validation;

use app::App;
use console_logger::LoggerConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let logger = console_logger::init(LoggerConfig::default())
        .inspect_err(|e| web_sys::console::warn_1(&format!("logger init failed: {}", e).into()))
        .ok();
    mount_to_body(move || {
        if let Some(handle) = logger {
            provide_context(handle);
        }
        view! { <App /> }
    });
}
