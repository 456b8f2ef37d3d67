//! Scroll restoration across route changes.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::scroll;

/// Resets the viewport to the document origin on every navigation.
///
/// Renders nothing. Mount it once inside the router, above the route outlet,
/// and the effect re-runs whenever any part of the location changes.
#[component]
pub fn ScrollToTop() -> impl IntoView {
    let location = use_location();

    Effect::new(move || {
        location.pathname.track();
        location.search.track();
        location.hash.track();
        scroll::to_origin();
    });
}
