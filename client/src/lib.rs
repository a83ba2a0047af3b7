//! # kamioi-client
//!
//! Leptos + WASM frontend for the Kamioi round-up investing product:
//! marketing pages, the blog, role-specific dashboards, demo mode, guided
//! tours and notifications.
//!
//! Built twice: with `hydrate` for the browser bundle and with `ssr` for the
//! server host, which renders the same `App` to HTML.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
