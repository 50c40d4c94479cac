//! Custom hooks shared by pages and components.

use gloo_events::EventListener;
use ui_core::viewport;
use yew::prelude::*;

/// Current window width in CSS pixels, when it can be read.
fn window_width() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
}

/// Classifies the viewport as compact (mobile) or regular, re-evaluating
/// on every window resize. An unreadable width reports regular.
#[hook]
pub fn use_is_compact() -> bool {
    let is_compact = use_state(|| viewport::is_compact(window_width()));

    {
        let is_compact = is_compact.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "resize", move |_| {
                    is_compact.set(viewport::is_compact(window_width()));
                })
            });
            // Dropping the handle detaches the listener on teardown.
            move || drop(listener)
        });
    }

    *is_compact
}
