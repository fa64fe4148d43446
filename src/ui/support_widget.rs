use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};
use crate::ui::lead_form::LeadForm;

/// Floating "talk to us" bubble in the bottom-right corner
#[component]
pub fn SupportWidget() -> impl IntoView {
    let (is_open, set_is_open) = signal(false);

    view! {
        <div id="support-widget" class="fixed bottom-6 right-6 z-40 flex flex-col items-end gap-3">
            <div
                class="w-80 card theme-transition origin-bottom-right transition-all duration-200"
                class:opacity-0=move || !is_open.get()
                class:scale-95=move || !is_open.get()
                class:pointer-events-none=move || !is_open.get()
                aria-hidden=move || (!is_open.get()).to_string()
                inert=move || !is_open.get()
            >
                <div class="card-header">
                    <div>
                        <h3 class="title-lg">"Questions?"</h3>
                        <p class="subtitle">"Leave your email and we'll get back to you."</p>
                    </div>
                </div>
                <div class="p-4">
                    <LeadForm id_prefix="widget" submit_label="Send" active=is_open.into() />
                </div>
            </div>

            <button
                class="w-14 h-14 rounded-full bg-accent-primary shadow-xl flex items-center justify-center hover:scale-105 transition-transform"
                on:click=move |_| set_is_open.update(|v| *v = !*v)
                aria-label=move || if is_open.get() { "Close support chat" } else { "Open support chat" }
                aria-expanded=move || is_open.get().to_string()
            >
                {move || {
                    let name = if is_open.get() { icons::X } else { icons::CHAT };
                    view! { <Icon name=name class="w-6 h-6 invert" /> }
                }}
            </button>
        </div>
    }
}
