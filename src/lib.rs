//! # workspaces-client
//!
//! Leptos + WASM frontend for the workspaces file-browsing service.
//!
//! This crate contains the typed REST client (`net`), the session and
//! current-user state (`state`), the route table (`routes`), and the pages
//! and components rendered in the browser. Everything below the view layer
//! is plain Rust and runs natively under `cargo test`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let parsed = config::ClientConfig::from_build_env();
    let level = parsed.as_ref().map_or(config::DEFAULT_LOG_LEVEL, |c| c.log_level);
    if let Some(level) = level.to_level() {
        if let Err(e) = console_log::init_with_level(level) {
            web_sys::console::warn_1(&format!("console logger not installed: {e}").into());
        }
    }
    if let Err(e) = parsed {
        log::warn!("{e}; using defaults");
    }
    leptos::mount::mount_to_body(app::App);
}
