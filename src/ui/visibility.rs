//! Viewport visibility hook and the `Reveal` wrapper
//!
//! `use_visibility_trigger` binds an `IntersectionObserver` to whatever div
//! the returned `NodeRef` is attached to. The decisions (when to fire, when a
//! watcher is stale) live in `core::VisibilityTrigger`; this module only
//! manages the browser observer lifecycle:
//! - a new observer whenever the bound element or the options change
//! - the previous observer disconnected first
//! - disconnected as soon as it fires, and on unmount

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::{DEFAULT_THRESHOLD, VisibilityOptions, VisibilityTrigger};

#[cfg(not(feature = "ssr"))]
use crate::core::IntersectionSample;
#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::{JsCast, JsValue, closure::Closure};
#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

#[cfg(not(feature = "ssr"))]
type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// Live browser observer; dropping it disconnects
#[cfg(not(feature = "ssr"))]
struct ObserverHandle {
    observer: web_sys::IntersectionObserver,
    _callback: ObserverCallback,
}

#[cfg(not(feature = "ssr"))]
impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observe a region and report, once, that it became visible.
///
/// Returns the `NodeRef` to bind (`node_ref=...`) and the visibility signal.
/// The signal stays `false` until the first qualifying intersection and
/// never goes back. If nothing is ever bound it simply stays `false`.
pub fn use_visibility_trigger(
    options: impl Into<Signal<VisibilityOptions>>,
) -> (NodeRef<Div>, Signal<bool>) {
    let options = options.into();
    let target = NodeRef::<Div>::new();
    let trigger = RwSignal::new(VisibilityTrigger::new(options.get_untracked()));
    let is_visible = Signal::derive(move || trigger.with(|t| t.is_visible()));

    #[cfg(not(feature = "ssr"))]
    {
        let handle = StoredValue::new_local(None::<ObserverHandle>);

        Effect::new(move |_| {
            let element = target.get();
            let options = options.get();

            // Previous observer goes away before anything new is attached
            handle.set_value(None);

            let watcher = trigger
                .try_update(|t| {
                    t.reconfigure(options.clone());
                    if element.is_some() {
                        t.attach()
                    } else {
                        t.release();
                        None
                    }
                })
                .flatten();

            let (Some(element), Some(watcher)) = (element, watcher) else {
                return;
            };

            let callback = ObserverCallback::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                        let sample = IntersectionSample::new(
                            entry.is_intersecting(),
                            entry.intersection_ratio(),
                        );
                        let fired = trigger
                            .try_update(|t| t.on_intersection(watcher, sample))
                            .unwrap_or(false);
                        if fired {
                            observer.disconnect();
                            break;
                        }
                    }
                },
            );

            let init = web_sys::IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(options.threshold));
            init.set_root_margin(&options.root_margin);

            match web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &init,
            ) {
                Ok(observer) => {
                    observer.observe(&element);
                    handle.set_value(Some(ObserverHandle {
                        observer,
                        _callback: callback,
                    }));
                }
                Err(_) => {
                    leptos::logging::warn!("IntersectionObserver unavailable, region stays hidden");
                    trigger.try_update(|t| t.release());
                }
            }
        });

        on_cleanup(move || {
            handle.try_update_value(|h| *h = None);
        });
    }

    (target, is_visible)
}

/// Wrapper that fades/slides its children in the first time it scrolls into view
#[component]
pub fn Reveal(
    children: Children,
    /// Extra classes for the wrapper div
    #[prop(optional)]
    class: &'static str,
    /// Fraction of the wrapper that must be visible
    #[prop(default = DEFAULT_THRESHOLD)]
    threshold: f64,
) -> impl IntoView {
    let (node_ref, is_visible) =
        use_visibility_trigger(VisibilityOptions::with_threshold(threshold));

    view! {
        <div
            node_ref=node_ref
            class=move || {
                if is_visible.get() {
                    format!("reveal visible {}", class)
                } else {
                    format!("reveal {}", class)
                }
            }
        >
            {children()}
        </div>
    }
}
