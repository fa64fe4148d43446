//! One-line status messages shown under forms

use crate::core::lead::SubmissionStatus;
use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Success or failure line for a submission; hidden while `None`
#[component]
pub fn StatusMessage(
    #[prop(into)]
    status: Signal<Option<SubmissionStatus>>,
) -> impl IntoView {
    move || {
        status.get().map(|status| {
            let (class, icon) = if status.is_error() {
                ("error-message", icons::ALERT_CIRCLE)
            } else {
                ("success-message", icons::CHECK)
            };
            view! {
                <div class=class role="status">
                    <Icon name=icon class="icon-text"/>
                    <span>{status.message()}</span>
                </div>
            }
        })
    }
}
