//! Storefront landing page.

use leptos::prelude::*;

use crate::catalog::CATEGORIES;
use crate::components::category_tile::CategoryTile;

/// Landing page: marketplace hero copy above the category strip.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home">
            <section class="home__hero">
                <h1 class="home__title">"Your One-Stop Shop for Gaming Goodies!"</h1>
                <p class="home__tagline">
                    "Buy and sell gaming products securely—gift cards, game coins, accounts, and more. Trusted by millions of gamers worldwide."
                </p>
            </section>
            <section class="home__art">
                <img class="home__art-image" src="/assets/hero.svg" alt=""/>
            </section>
            <nav class="category-strip">
                {CATEGORIES
                    .iter()
                    .map(|category| view! { <CategoryTile category=category/> })
                    .collect_view()}
            </nav>
        </main>
    }
}
