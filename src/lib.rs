//! # orders-dashboard
//!
//! Leptos + WASM client for the orders dashboard.
//!
//! This crate contains the page, components, application state, the HTTP
//! gateway to the orders backend, and the controller that sequences loading,
//! refresh and logout. Browser collaborators (storage, alerts, cookies,
//! navigation) sit behind small traits so the load/refresh flows can be
//! exercised natively in tests.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
