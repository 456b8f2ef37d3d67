//! Programmatic focus moves between form inputs.

use wasm_bindgen::JsCast as _;

/// Moves keyboard focus to the input element with the given id.
///
/// Unknown ids and elements that are not inputs are ignored.
pub fn focus_input(id: &str) {
    if let Some(window) = web_sys::window()
        && let Some(document) = window.document()
        && let Some(element) = document.get_element_by_id(id)
        && let Ok(input) = element.dyn_into::<web_sys::HtmlInputElement>()
    {
        let _ = input.focus();
    }
}
