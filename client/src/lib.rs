//! # ptas-client
//!
//! Leptos + WASM dashboard for PTAS wastewater treatment plants.
//!
//! This crate holds the browser side: localStorage and `gloo-net` adapters
//! for the `ptas` core, the reactive session cell, the route guard
//! component, the sidebar layout and the five pages. Everything that touches
//! browser APIs is gated on the `csr` feature; without it the crate builds
//! natively so the page helpers can be unit tested.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
