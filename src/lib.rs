//! # lootmart
//!
//! Leptos + WASM front-end for a gaming goods marketplace. Three independent
//! units live here: the storefront landing page, the phone verification
//! form, and a scroll restoration helper that keeps every navigation
//! starting at the top of the page.
//!
//! Interaction rules are plain data in `state` with no browser dependency,
//! so they are covered by native unit tests; browser effects stay at the
//! edges (`util` and the pages that own signals).

pub mod app;
pub mod catalog;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;
