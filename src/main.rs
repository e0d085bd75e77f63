//! Tasks & Sketches Entry Point

mod app;
mod components;
mod config;
mod context;
mod error;
mod format;
mod gallery;
mod models;
mod repository;
mod storage;
mod store;
mod tasks;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init(config::LOG_LEVEL, config::LOG_CAPACITY) {
        web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
    }
    mount_to_body(App);
}
