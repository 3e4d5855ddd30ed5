//! Blocking browser dialogs.
//!
//! The validation and confirmation gates of this app are interactive by
//! design: nothing destructive or bulk happens without one of these.

use web_sys::window;

/// Blocking alert dialog. No-op outside a browser context.
pub fn alert(message: &str) {
    if let Some(w) = window() {
        let _ = w.alert_with_message(message);
    }
}

/// Blocking confirm dialog; `false` when unavailable or dismissed.
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Blocking prompt dialog; `None` when cancelled, unavailable, or the answer
/// is blank.
pub fn prompt(message: &str) -> Option<String> {
    window()
        .and_then(|w| w.prompt_with_message(message).ok())
        .flatten()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
