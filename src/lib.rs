//! Replydesk - marketing site for a customer-support chat product
//!
//! A Leptos full-stack crate: `core` holds the plain-Rust state machines
//! (viewport visibility, chat playback, lead submissions), `ui` the
//! components driving them in the browser, and the `ssr` binary serves the
//! page plus the lead-forwarding API.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
