//! # ncof-subscription-ui
//!
//! Leptos + WASM single-page front end for the NCOF Events Subscription
//! service. Lists the active event subscriptions, shows the full JSON of a
//! selected subscription in a modal, and deletes subscriptions after a
//! confirmation prompt.
//!
//! All state is transient, in-memory, and owned by the manager view; the
//! only external surface is the service's REST collection endpoint.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
