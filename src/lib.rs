//! # arena-client
//!
//! Leptos + WASM frontend core for the team task arena. Teams sign in, watch
//! the dashboard and submit solutions; admins manage tasks and review
//! submissions.
//!
//! This crate owns the navigation authorization layer: the session credential
//! store, the route table, and the decision pipeline (global interceptor, then
//! per-route entry guards) that runs before every page transition. Page
//! components and HTTP calls live elsewhere and plug into [`app::App`].
//!
//! TRADE-OFFS
//! ==========
//! Decisions here are UX-level routing control only. The backend enforces the
//! real access boundary; a tampered `localStorage` can reach admin screens but
//! not admin data.

pub mod app;
pub mod config;
pub mod nav;
pub mod routing;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the root component.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        // No logger yet; the console is the only place left to report it.
        web_sys::console::warn_1(&format!("console logger not installed: {e}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
