//! Shared destination page for the category tiles.

use leptos::prelude::*;

/// Static marketplace blurb. Every category tile links here.
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <main class="about">
            <h1 class="about__title">"About lootmart"</h1>
            <p class="about__body">
                "lootmart is a marketplace for gaming goods: gift cards, game coins, in-game items, boosting, and full accounts. Buyers and sellers trade through escrowed checkout, and every listing is reviewed before it goes live."
            </p>
            <a class="about__back" href="/">"Back to the storefront"</a>
        </main>
    }
}
