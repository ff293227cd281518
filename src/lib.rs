//! # admin-web
//!
//! Leptos + WASM front-end for the user-management admin panel.
//!
//! The session layer (`state::session`, `util::token`) and the REST client
//! (`net::api`) carry the logic; `pages` and `components` render it. Browser
//! bindings are compiled only with the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
