//! Single tile in the landing page category strip.

use leptos::prelude::*;

use crate::catalog::Category;

/// One linked category tile: artwork above the category name.
///
/// Every tile routes to the shared about page.
#[component]
pub fn CategoryTile(category: &'static Category) -> impl IntoView {
    let image_style = category
        .corner_radius
        .map_or(String::new(), |radius| format!("border-radius:{radius};"));

    view! {
        <a href="/about" class="category-strip__link">
            <div class="category-tile">
                <img
                    class="category-tile__image"
                    src=category.image
                    alt=category.name
                    style=image_style
                />
                <p class="category-tile__name">{category.name}</p>
            </div>
        </a>
    }
}
