//! Viewport width access for responsive card layout.
//!
//! TRADE-OFFS
//! ==========
//! The server has no viewport, so SSR reports `None` and callers keep the
//! compact layout until hydration supplies a real width.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Current `window.innerWidth` in CSS pixels, if a window exists.
pub fn current_width() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.inner_width().ok()).and_then(|v| v.as_f64())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Apply the current width now and on every `resize` event.
pub fn track_viewport(ui: RwSignal<UiState>) {
    #[cfg(feature = "hydrate")]
    {
        // Deferred to an effect so the first client frame matches SSR markup.
        Effect::new(move || {
            if let Some(width) = current_width() {
                ui.update(|u| u.set_viewport_width(width));
            }
        });
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(width) = current_width() {
                ui.update(|u| u.set_viewport_width(width));
            }
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ui;
    }
}
