//! # vivero-access
//!
//! Leptos + WASM access page for the Vivero management panel. Checks that
//! the API and its database are reachable, then authenticates a user with
//! `POST /api/auth/login` and shows the returned identity.
//!
//! `net` wraps the two REST calls, `state` holds the view-state machine,
//! `controller` runs the async flows and `pages` renders them.

pub mod app;
pub mod config;
pub mod controller;
pub mod messages;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: install logging and mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
