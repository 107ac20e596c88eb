//! Browser-side admin console for the property management backend.
//!
//! ARCHITECTURE
//! ============
//! `pages` own route-scoped orchestration, `components` render shared row
//! and widget chrome, `state` holds reducer-style page state, and `net`
//! talks to the REST backend.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: attach the app to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
