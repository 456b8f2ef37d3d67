//! Viewport scrolling.

/// Scrolls the window back to the document origin.
pub fn to_origin() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
