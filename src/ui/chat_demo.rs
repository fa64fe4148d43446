//! Hero chat demo
//!
//! Plays the scripted support conversation once, the first time the demo
//! scrolls into view. Timing lives in `core::ChatSequencer`; this component
//! runs the single timer loop, renders the revealed lines and keeps the
//! message list scrolled to the bottom.

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::{ChatScript, ChatSequencer, ScriptMessage, Speaker, Tick, VisibilityOptions};
use crate::ui::visibility::use_visibility_trigger;

/// Threshold for the demo: start once a third of the widget is on screen
const CHAT_DEMO_THRESHOLD: f64 = 0.3;

/// Drive `sequencer` from `tick` until it finishes, is cancelled or unmounts
#[cfg(not(feature = "ssr"))]
fn run_playback(sequencer: RwSignal<ChatSequencer>, tick: Tick) {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_futures::spawn_local;

    spawn_local(async move {
        let mut tick = tick;
        loop {
            let delay_ms = u32::try_from(tick.delay.as_millis()).unwrap_or(u32::MAX);
            TimeoutFuture::new(delay_ms).await;

            // try_update is None once the component (and signal) is disposed
            match sequencer.try_update(|s| s.fire(tick.epoch)).flatten() {
                Some(next) => tick = next,
                None => break,
            }
        }
    });
}

#[cfg(feature = "ssr")]
fn run_playback(_sequencer: RwSignal<ChatSequencer>, _tick: Tick) {}

/// Animated support conversation shown in the hero section
#[component]
pub fn ChatDemo(
    /// Conversation to play
    #[prop(optional)]
    script: Option<ChatScript>,
) -> impl IntoView {
    let sequencer = RwSignal::new(ChatSequencer::new(script.unwrap_or_default()));
    let (host_ref, is_visible) =
        use_visibility_trigger(VisibilityOptions::with_threshold(CHAT_DEMO_THRESHOLD));
    let list_ref = NodeRef::<Div>::new();

    // Activation: at most once per mounted instance
    Effect::new(move |_| {
        let visible = is_visible.get();
        if let Some(tick) = sequencer
            .try_update(|s| s.on_host_visibility(visible))
            .flatten()
        {
            run_playback(sequencer, tick);
        }
    });

    // Keep the newest line in view
    Effect::new(move |_| {
        sequencer.track();
        if let Some(list) = list_ref.get_untracked() {
            list.set_scroll_top(list.scroll_height());
        }
    });

    on_cleanup(move || {
        sequencer.try_update(|s| s.cancel());
    });

    let revealed = move || sequencer.with(|s| s.revealed().to_vec());
    let is_typing = move || sequencer.with(|s| s.typing_index().is_some());

    view! {
        <div node_ref=host_ref class="chat-demo bg-theme-primary rounded-2xl border border-theme shadow-2xl overflow-hidden">
            // Widget header
            <div class="flex items-center gap-3 px-4 py-3 bg-accent-primary text-white">
                <div class="w-9 h-9 rounded-full bg-white/20 flex items-center justify-center font-semibold">
                    "R"
                </div>
                <div>
                    <p class="font-medium text-sm">"Replydesk Support"</p>
                    <p class="text-xs opacity-80">"Typically replies in under a minute"</p>
                </div>
            </div>

            // Message list
            <div
                node_ref=list_ref
                class="p-4 space-y-3 h-80 overflow-y-auto scroll-smooth"
                aria-live="polite"
            >
                <For
                    each=move || revealed().into_iter().enumerate()
                    key=|(index, _)| *index
                    children=move |(_, message)| view! { <ChatBubble message=message /> }
                />
                <Show when=is_typing>
                    <TypingIndicator />
                </Show>
            </div>

            // Input (decorative)
            <div class="p-3 border-t border-theme">
                <input
                    type="text"
                    class="w-full px-4 py-2 bg-theme-secondary/40 border border-theme rounded-xl text-sm"
                    placeholder="Type your message..."
                    disabled
                    aria-label="Chat input (demo)"
                />
            </div>
        </div>
    }
}

#[component]
fn ChatBubble(message: ScriptMessage) -> impl IntoView {
    let (row_class, bubble_class) = match message.speaker {
        Speaker::Agent => (
            "flex justify-start chat-bubble-in",
            "bg-theme-secondary text-theme-primary rounded-2xl rounded-bl-sm px-4 py-2 max-w-[80%] text-sm",
        ),
        Speaker::Customer => (
            "flex justify-end chat-bubble-in",
            "bg-accent-primary text-white rounded-2xl rounded-br-sm px-4 py-2 max-w-[80%] text-sm",
        ),
    };

    view! {
        <div class=row_class data-speaker=message.speaker.to_string()>
            <div class=bubble_class>{message.text.to_string()}</div>
        </div>
    }
}

/// Three bouncing dots
#[component]
fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="flex justify-start" aria-label="Agent is typing">
            <div class="flex items-center gap-1 bg-theme-secondary rounded-2xl rounded-bl-sm px-4 py-3">
                <span class="typing-dot"></span>
                <span class="typing-dot typing-dot-2"></span>
                <span class="typing-dot typing-dot-3"></span>
            </div>
        </div>
    }
}
