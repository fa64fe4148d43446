//! Common reusable UI components
//!
//! Widgets shared by the lead form and the support widget.

pub mod form;
pub mod message;
pub mod modal;

pub use form::{FormField, SelectField};
pub use message::StatusMessage;
pub use modal::BaseModal;
