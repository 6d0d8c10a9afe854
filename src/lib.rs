//! # transplant-link-ui
//!
//! Leptos + WASM frontend for the Transplant Link organ donation and
//! transplantation management portal. Covers user, donor and patient
//! record keeping, manual and automatic organ matching, reports, and
//! session handling against the portal's REST backend.

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
