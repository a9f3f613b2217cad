//! Blocking user-facing notices (alert/confirm) behind one seam.

use web_sys::window;

/// Blocking alert. Silently a no-op when window is unavailable.
pub fn alert(message: &str) {
    if let Some(w) = window() {
        let _ = w.alert_with_message(message);
    }
}

/// Blocking confirm dialog; `false` when window is unavailable.
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
