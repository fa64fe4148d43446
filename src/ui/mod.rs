pub mod chat_demo;
pub mod common;
pub mod icon;
pub mod lead_form;
pub mod pages;
pub mod support_widget;
pub mod theme;
pub mod visibility;

pub use chat_demo::ChatDemo;
pub use icon::{Icon, icons};
pub use lead_form::{LeadCaptureModal, LeadForm, provide_lead_modal_context, use_lead_modal_context};
pub use theme::{ThemeContext, ThemeMode, provide_theme_context, use_theme_context};
pub use visibility::{Reveal, use_visibility_trigger};
