//! # client
//!
//! Leptos + WASM frontend for the courier messaging relay.
//!
//! The crate hosts the selection status bar (`state::selection`), the
//! message renderer (`state::messages`), the recipient roster, wire types,
//! the websocket message stream, and the Leptos pages and components that
//! bind them to the DOM.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
