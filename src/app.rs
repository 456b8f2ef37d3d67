//! Root application component: routing shell and scroll restoration.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::scroll_to_top::ScrollToTop;
use crate::pages::{about::AboutPage, home::HomePage, verify::VerifyPage};

/// Root application component.
///
/// Sets up client-side routing. The scroll helper mounts above the route
/// outlet so it observes every location change the router produces.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="lootmart"/>

        <Router>
            <ScrollToTop/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("verify") view=VerifyPage/>
                <Route path=StaticSegment("about") view=AboutPage/>
            </Routes>
        </Router>
    }
}
