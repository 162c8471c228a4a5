//! Thin wrappers over browser globals (clock, alert dialog).
//!
//! SSR builds get deterministic no-op fallbacks.

/// Milliseconds since the Unix epoch according to the browser clock.
///
/// Returns `0` on the server, which callers treat as "no clock".
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let now = js_sys::Date::now() as i64;
        now
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

/// Show a blocking alert dialog.
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
