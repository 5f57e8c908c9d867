//! Viewport width tracking for the responsive source preview.

use std::rc::Rc;

use dioxus::prelude::*;
use gloo_events::EventListener;

/// Current `window.innerWidth` in CSS pixels.
///
/// Returns `f64::INFINITY` when there is no window to measure, which
/// leaves the preview bounded only by its fixed maximum.
#[must_use]
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(f64::INFINITY)
}

/// A signal holding the viewport width, updated on every `resize`.
///
/// The listener lives as long as the calling component.
pub fn use_viewport_width() -> Signal<f64> {
    let mut width = use_signal(viewport_width);

    use_hook(move || {
        let listener = web_sys::window().map(|window| {
            EventListener::new(&window, "resize", move |_| {
                width.set(viewport_width());
            })
        });
        Rc::new(listener)
    });

    width
}
