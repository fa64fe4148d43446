//! Core domain logic for the Replydesk landing page
//!
//! Everything here is plain Rust state, compiled for both the server and the
//! browser bundle. The `ui` module drives it from timers and DOM callbacks.

mod chat_script;
#[cfg(feature = "ssr")]
pub mod config;
pub mod lead;
#[cfg(feature = "ssr")]
pub mod lead_api;
mod playback;
#[cfg(test)]
mod tests;
mod visibility;

pub use chat_script::*;
pub use playback::*;
pub use visibility::*;
