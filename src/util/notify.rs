//! Blocking user notifications.

/// Shows `message` in the browser's native alert dialog.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
