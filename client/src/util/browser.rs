//! Thin wrappers over browser-only APIs used by card actions.
//!
//! Every function is a no-op outside the `hydrate` build so components can
//! call them unconditionally from event handlers.

/// Show a blocking `window.alert` with `message`.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Write `text` to the system clipboard, best effort.
pub fn copy_to_clipboard(text: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().clipboard().write_text(text);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
    }
}

/// Absolute URL for an in-app `path`, based on the current page origin.
pub fn absolute_url(path: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return join_origin(&origin, path);
        }
    }
    path.to_owned()
}

#[cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]
fn join_origin(origin: &str, path: &str) -> String {
    format!("{}/{}", origin.trim_end_matches('/'), path.trim_start_matches('/'))
}
