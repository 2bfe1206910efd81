//! # client
//!
//! Leptos + WASM frontend for the seat picker.
//!
//! This crate contains the booking page, the seat-map widget and its legend,
//! the selection state the page owns, and the class mapping that turns seat
//! state into CSS. Seat rules live in the `seats` crate; this crate only
//! renders them and forwards clicks.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrates the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A logger may already be installed when the module is re-initialized.
    console_log::init_with_level(log::Level::Debug).unwrap_or_default();
    leptos::mount::hydrate_body(app::App);
}
