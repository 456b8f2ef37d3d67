use super::*;

use std::collections::HashSet;

// =============================================================
// Catalog contents
// =============================================================

#[test]
fn catalog_lists_eight_categories() {
    assert_eq!(CATEGORIES.len(), 8);
}

#[test]
fn category_names_are_unique() {
    let names: HashSet<&str> = CATEGORIES.iter().map(|category| category.name).collect();
    assert_eq!(names.len(), CATEGORIES.len());
}

#[test]
fn artwork_paths_point_into_bundled_assets() {
    for category in CATEGORIES {
        assert!(
            category.image.starts_with("/assets/categories/"),
            "unexpected path for {}: {}",
            category.name,
            category.image
        );
        assert!(category.image.ends_with(".svg"));
    }
}

#[test]
fn only_items_artwork_is_rounded() {
    for category in CATEGORIES {
        if category.name == "Items" {
            assert_eq!(category.corner_radius, Some("1000px"));
        } else {
            assert_eq!(category.corner_radius, None, "{}", category.name);
        }
    }
}
