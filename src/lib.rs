//! # tickets-client
//!
//! Leptos + WASM front-end for the ticket tracking application.
//!
//! The backend owns authentication (cookie sessions with CSRF priming)
//! and ticket storage; this crate holds the typed application
//! configuration consumed by that collaborator, the client-side filter
//! state for the ticket list, and the pages/components rendering both.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook, wire `log` to the browser
/// console, and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
