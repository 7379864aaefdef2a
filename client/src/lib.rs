//! # client
//!
//! Leptos + WASM frontend for the cancer-imaging portal.
//!
//! This crate contains the session store, the role guard shared by every
//! dashboard, the login modal, and the route-level pages. The `ssr` feature
//! lets the server render the same `App`; the `hydrate` feature builds the
//! browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
