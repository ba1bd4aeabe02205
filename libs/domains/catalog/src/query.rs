//! Pure catalog queries.
//!
//! Every function here is a read-only derivation over the product slice
//! it is handed: no mutation, no caching, no error conditions. "Not
//! found" is an empty vec or `None`, never a failure. Input order is
//! preserved unless a function documents its own ordering.

use crate::models::{ids_of, CategoryFilter, Product};
use serde::Deserialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use utoipa::ToSchema;

/// How many products the featured shelf shows by default.
pub const DEFAULT_FEATURED_LIMIT: usize = 3;

/// How many related products a detail page shows by default.
pub const DEFAULT_RELATED_LIMIT: usize = 4;

/// Products whose category set contains `category_id`, in input order.
pub fn by_category<'a>(products: &'a [Product], category_id: &str) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| p.category.contains(category_id))
        .collect()
}

/// Products matching both the category and the sub-category.
///
/// A product without a sub-category never matches, so this is always a
/// subset of [`by_category`] for the same category.
pub fn by_sub_category_within_category<'a>(
    products: &'a [Product],
    category_id: &str,
    sub_category_id: &str,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| {
            p.category.contains(category_id)
                && ids_of(p.sub_category.as_ref())
                    .iter()
                    .any(|s| s == sub_category_id)
        })
        .collect()
}

/// The single entry point the shop pages use: narrows by sub-category
/// when the filter carries one, otherwise filters by category alone.
pub fn by_filter<'a>(products: &'a [Product], filter: &CategoryFilter) -> Vec<&'a Product> {
    match &filter.sub_category {
        Some(sub) => by_sub_category_within_category(products, &filter.category, sub),
        None => by_category(products, &filter.category),
    }
}

/// The product with the given id, if present.
pub fn by_id<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.id == id)
}

/// The featured shelf: explicit curation wins over heuristic popularity.
///
/// Products flagged `featured` are returned first-come in store order.
/// Only when nothing is flagged does the shelf fall back to the top-rated
/// products (missing rating reads as 0; the sort is stable so ties keep
/// their store order).
pub fn featured<'a>(products: &'a [Product], limit: usize) -> Vec<&'a Product> {
    let flagged: Vec<&Product> = products
        .iter()
        .filter(|p| p.featured == Some(true))
        .collect();

    if !flagged.is_empty() {
        return flagged.into_iter().take(limit).collect();
    }

    let mut by_rating: Vec<&Product> = products.iter().collect();
    by_rating.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
    by_rating.into_iter().take(limit).collect()
}

/// Products related to the anchor product.
///
/// Candidates share the anchor's primary category OR its primary
/// sub-category (first list element, or the scalar itself). When that
/// yields fewer than `limit`, the rest of the catalog tops the list up
/// in store order. The anchor itself never appears. An unknown anchor id
/// degrades to the first `limit` other products.
pub fn related<'a>(products: &'a [Product], product_id: &str, limit: usize) -> Vec<&'a Product> {
    let Some(anchor) = by_id(products, product_id) else {
        return products
            .iter()
            .filter(|p| p.id != product_id)
            .take(limit)
            .collect();
    };

    let anchor_category = anchor.category.primary();
    let anchor_sub = anchor.sub_category.as_ref().and_then(|s| s.primary());

    let mut related: Vec<&Product> = products
        .iter()
        .filter(|p| {
            if p.id == product_id {
                return false;
            }
            let shares_category =
                anchor_category.is_some_and(|c| p.category.contains(c));
            let shares_sub = anchor_sub.is_some_and(|s| {
                ids_of(p.sub_category.as_ref()).iter().any(|ps| ps == s)
            });
            shares_category || shares_sub
        })
        .collect();

    if related.len() < limit {
        let fillers: Vec<&Product> = products
            .iter()
            .filter(|p| p.id != product_id && !related.iter().any(|r| r.id == p.id))
            .take(limit - related.len())
            .collect();
        related.extend(fillers);
    }

    related.truncate(limit);
    related
}

/// Case-insensitive substring search over name, description, brand, and
/// the raw category/sub-category ids.
pub fn search<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    let needle = term.to_lowercase();
    products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
                || p.brand.to_lowercase().contains(&needle)
                || p.category
                    .as_slice()
                    .iter()
                    .any(|c| c.to_lowercase().contains(&needle))
                || ids_of(p.sub_category.as_ref())
                    .iter()
                    .any(|s| s.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Sort key for shop views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Name,
    PriceLow,
    PriceHigh,
    Rating,
}

/// Order a view: manual priority first (absent priority sorts last),
/// then the requested key. Stable, so equal entries keep store order.
pub fn sort_view<'a>(mut items: Vec<&'a Product>, key: SortKey) -> Vec<&'a Product> {
    items.sort_by(|a, b| {
        let pa = a.priority.unwrap_or(i64::MAX);
        let pb = b.priority.unwrap_or(i64::MAX);
        pa.cmp(&pb).then_with(|| match key {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::PriceLow => a.price.cmp(&b.price),
            SortKey::PriceHigh => b.price.cmp(&a.price),
            SortKey::Rating => b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal),
        })
    });
    items
}

/// Distinct category ids present on the products, sorted.
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .flat_map(|p| p.category.as_slice())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct sub-category ids present on the products, sorted.
pub fn distinct_sub_categories(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .flat_map(|p| ids_of(p.sub_category.as_ref()))
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IdRef;

    fn product(id: &str, category: IdRef) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            brand: String::new(),
            description: String::new(),
            price: 1000,
            original_price: None,
            image: String::new(),
            category,
            sub_category: None,
            in_stock: true,
            stock_count: 1,
            rating: 0.0,
            reviews: 0,
            specifications: Default::default(),
            features: Vec::new(),
            priority: None,
            videos: Vec::new(),
            featured: None,
        }
    }

    fn with_sub(mut p: Product, sub: IdRef) -> Product {
        p.sub_category = Some(sub);
        p
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.clone()).collect()
    }

    /// The scenario catalog: scalar, list, and disjoint categories.
    fn scenario() -> Vec<Product> {
        vec![
            product("a", IdRef::from("x")),
            product("b", IdRef::from(vec!["x", "y"])),
            product("c", IdRef::from("y")),
        ]
    }

    #[test]
    fn by_category_matches_scalar_and_list_fields() {
        let catalog = scenario();
        assert_eq!(ids(&by_category(&catalog, "x")), ["a", "b"]);
        assert_eq!(ids(&by_category(&catalog, "y")), ["b", "c"]);
        assert!(by_category(&catalog, "z").is_empty());
    }

    #[test]
    fn by_id_returns_absent_for_unknown_ids() {
        let catalog = scenario();
        assert_eq!(by_id(&catalog, "a").unwrap().id, "a");
        assert!(by_id(&catalog, "d").is_none());
    }

    #[test]
    fn sub_category_filter_never_widens_the_category_filter() {
        let catalog = vec![
            with_sub(product("a", IdRef::from("x")), IdRef::from("s")),
            product("b", IdRef::from("x")),
            // matching sub-category but wrong category: must not appear
            with_sub(product("c", IdRef::from("y")), IdRef::from("s")),
            with_sub(product("d", IdRef::from(vec!["x", "y"])), IdRef::from(vec!["s", "t"])),
        ];

        let narrowed = by_sub_category_within_category(&catalog, "x", "s");
        assert_eq!(ids(&narrowed), ["a", "d"]);

        let wide = by_category(&catalog, "x");
        for p in &narrowed {
            assert!(wide.iter().any(|w| w.id == p.id));
        }
    }

    #[test]
    fn product_without_sub_category_never_matches_a_sub_filter() {
        let catalog = vec![product("a", IdRef::from("x"))];
        assert!(by_sub_category_within_category(&catalog, "x", "s").is_empty());
    }

    #[test]
    fn by_filter_round_trips_to_the_lower_level_queries() {
        let catalog = vec![
            with_sub(product("a", IdRef::from("x")), IdRef::from("s")),
            product("b", IdRef::from("x")),
        ];

        let category_only = CategoryFilter {
            category: "x".to_string(),
            sub_category: None,
        };
        assert_eq!(
            ids(&by_filter(&catalog, &category_only)),
            ids(&by_category(&catalog, "x"))
        );

        let narrowed = CategoryFilter {
            category: "x".to_string(),
            sub_category: Some("s".to_string()),
        };
        assert_eq!(
            ids(&by_filter(&catalog, &narrowed)),
            ids(&by_sub_category_within_category(&catalog, "x", "s"))
        );
    }

    #[test]
    fn featured_prefers_explicit_curation_over_rating() {
        let mut catalog = scenario();
        catalog[0].rating = 4.9;
        catalog[1].rating = 4.8;
        catalog[2].rating = 2.0;
        catalog[2].featured = Some(true);

        // One flagged product beats several higher-rated ones.
        assert_eq!(ids(&featured(&catalog, 3)), ["c"]);
    }

    #[test]
    fn featured_falls_back_to_stable_rating_order() {
        let mut catalog = vec![
            product("a", IdRef::from("x")),
            product("b", IdRef::from("x")),
            product("c", IdRef::from("x")),
            product("d", IdRef::from("x")),
        ];
        catalog[1].rating = 4.5;
        catalog[3].rating = 4.5;
        // a and c stay at rating 0; b and d tie and must keep store order
        assert_eq!(ids(&featured(&catalog, 3)), ["b", "d", "a"]);
    }

    #[test]
    fn featured_respects_the_limit_and_never_duplicates() {
        let mut catalog = scenario();
        for p in &mut catalog {
            p.featured = Some(true);
        }
        let shelf = featured(&catalog, 2);
        assert_eq!(shelf.len(), 2);
        let mut seen = std::collections::HashSet::new();
        assert!(shelf.iter().all(|p| seen.insert(&p.id)));
    }

    #[test]
    fn related_puts_shared_category_before_fillers() {
        // anchor in category A, 2 other A products, 5 unrelated
        let catalog = vec![
            product("u1", IdRef::from("other")),
            product("anchor", IdRef::from("a")),
            product("u2", IdRef::from("other")),
            product("a1", IdRef::from("a")),
            product("u3", IdRef::from("other")),
            product("a2", IdRef::from(vec!["a", "other"])),
            product("u4", IdRef::from("other")),
            product("u5", IdRef::from("other")),
        ];

        let result = related(&catalog, "anchor", 4);
        assert_eq!(ids(&result), ["a1", "a2", "u1", "u2"]);
    }

    #[test]
    fn related_matches_on_shared_primary_sub_category_too() {
        let catalog = vec![
            with_sub(product("anchor", IdRef::from("a")), IdRef::from(vec!["s", "t"])),
            // different category, shares the anchor's primary sub-category
            with_sub(product("x", IdRef::from("b")), IdRef::from("s")),
            // different category, matches only the anchor's secondary sub
            with_sub(product("y", IdRef::from("b")), IdRef::from("t")),
        ];

        let result = related(&catalog, "anchor", 1);
        assert_eq!(ids(&result), ["x"]);
    }

    #[test]
    fn related_never_contains_the_anchor_and_caps_at_catalog_size() {
        let catalog = scenario();
        let result = related(&catalog, "a", 4);
        assert!(result.iter().all(|p| p.id != "a"));
        assert_eq!(result.len(), catalog.len() - 1);
    }

    #[test]
    fn related_unknown_anchor_degrades_to_leading_products() {
        let catalog = scenario();
        assert_eq!(ids(&related(&catalog, "ghost", 2)), ["a", "b"]);
    }

    #[test]
    fn queries_are_idempotent_on_an_unchanged_snapshot() {
        let mut catalog = scenario();
        catalog[0].rating = 3.0;

        assert_eq!(ids(&by_category(&catalog, "x")), ids(&by_category(&catalog, "x")));
        assert_eq!(ids(&featured(&catalog, 3)), ids(&featured(&catalog, 3)));
        assert_eq!(ids(&related(&catalog, "b", 4)), ids(&related(&catalog, "b", 4)));
    }

    #[test]
    fn search_scans_text_fields_and_raw_ids() {
        let mut catalog = scenario();
        catalog[0].name = "Hydraulic Jack".to_string();
        catalog[1].brand = "Garutech".to_string();
        catalog[2].description = "Two-post lift".to_string();

        assert_eq!(ids(&search(&catalog, "JACK")), ["a"]);
        assert_eq!(ids(&search(&catalog, "garutech")), ["b"]);
        assert_eq!(ids(&search(&catalog, "lift")), ["c"]);
        // raw category id matches as well
        assert_eq!(ids(&search(&catalog, "x")), ["a", "b"]);
        assert!(search(&catalog, "welder").is_empty());
    }

    #[test]
    fn sort_view_orders_by_priority_then_key() {
        let mut catalog = vec![
            product("cheap", IdRef::from("x")),
            product("pinned", IdRef::from("x")),
            product("dear", IdRef::from("x")),
        ];
        catalog[0].price = 100;
        catalog[1].price = 900;
        catalog[1].priority = Some(1);
        catalog[2].price = 500;

        let view: Vec<&Product> = catalog.iter().collect();
        let sorted = sort_view(view, SortKey::PriceLow);
        // pinned first despite its price, then by ascending price
        assert_eq!(ids(&sorted), ["pinned", "cheap", "dear"]);

        let view: Vec<&Product> = catalog.iter().collect();
        let sorted = sort_view(view, SortKey::PriceHigh);
        assert_eq!(ids(&sorted), ["pinned", "dear", "cheap"]);
    }

    #[test]
    fn distinct_id_sets_are_sorted_and_deduplicated() {
        let catalog = vec![
            with_sub(product("a", IdRef::from(vec!["x", "y"])), IdRef::from("s")),
            with_sub(product("b", IdRef::from("x")), IdRef::from(vec!["s", "t"])),
        ];
        assert_eq!(distinct_categories(&catalog), ["x", "y"]);
        assert_eq!(distinct_sub_categories(&catalog), ["s", "t"]);
    }
}
