//! # outliers-client
//!
//! Leptos + WASM frontend for The Outliers community site.
//!
//! This crate contains the pages, components, application state, form
//! validation and the webhook client. The `ssr` feature compiles it into the
//! Axum host for server rendering; the `hydrate` feature builds the browser
//! bundle.

pub mod app;
pub mod components;
pub mod forms;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("outliers client hydrating");
    leptos::mount::hydrate_body(app::App);
}
