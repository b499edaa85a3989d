//! # civicdesk-client
//!
//! Leptos + WASM frontend for the CivicDesk resident portal, scoped to the
//! authentication slice: a shared auth store, the REST transport behind it,
//! and the login/register/home routes that consume it.
//!
//! The store mirrors the server's cookie session into one reactive
//! `AuthState` (current user, in-flight flag, last error) that route guards
//! and components read from context.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
