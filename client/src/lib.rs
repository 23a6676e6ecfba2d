//! # client
//!
//! Leptos + WASM frontend for the trade admin console.
//!
//! This crate contains the pages, components, and state machines of the
//! admin UI and the REST collaborator they call. Entity types, form schemas,
//! and validation come from the shared `records` crate so the browser and the
//! server reject the same inputs with the same messages.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
