//! Storefront category catalog.

/// One product category tile on the landing page.
#[derive(Clone, Copy)]
pub struct Category {
    /// Display label rendered under the tile artwork.
    pub name: &'static str,
    /// Tile artwork path, served from the bundled assets directory.
    pub image: &'static str,
    /// Border radius applied to the tile artwork, when the artwork needs one.
    pub corner_radius: Option<&'static str>,
}

/// Every category the storefront advertises, in display order.
pub const CATEGORIES: &[Category] = &[
    Category { name: "Gift Cards", image: "/assets/categories/gift-cards.svg", corner_radius: None },
    Category { name: "Games", image: "/assets/categories/games.svg", corner_radius: None },
    Category { name: "Software & Apps", image: "/assets/categories/software-apps.svg", corner_radius: None },
    Category { name: "Payment Cards", image: "/assets/categories/payment-cards.svg", corner_radius: None },
    Category { name: "Game Coins", image: "/assets/categories/game-coins.svg", corner_radius: None },
    Category { name: "Items", image: "/assets/categories/items.svg", corner_radius: Some("1000px") },
    Category { name: "Boosting", image: "/assets/categories/boosting.svg", corner_radius: None },
    Category { name: "Accounts", image: "/assets/categories/accounts.svg", corner_radius: None },
];

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;
