//! # portal-client
//!
//! Leptos + WASM frontend shell for the school portal. Boots the client-side
//! router, runs a one-shot session check against the backend API, and routes
//! unauthenticated visitors to the login/registration screens.
//!
//! This crate contains pages, application state, the route policy table, and
//! the REST API helpers. Browser-only behavior (fetch, logging) lives behind
//! the `hydrate` feature; `ssr` builds render the HTML shell.

pub mod app;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;

/// WASM entry point: install the panic hook and console logger, then hydrate
/// the server-rendered body into the live [`app::App`].
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
