//! Leptos front end for the record browser.
//!
//! Built twice: with `ssr` into the server binary for rendering, and with
//! `hydrate` into WASM for the browser.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
