// Rust guideline compliant 2026-02-06

//! Unit tests for catalog search filtering against the demo catalog.

use rewear_core::sample::sample_items;
use rewear_core::search::{filter, Query};
use rewear_core::{Category, Condition};

fn titles(query: &Query) -> Vec<String> {
    let items = sample_items();
    filter(&items, query)
        .into_iter()
        .map(|item| item.title.clone())
        .collect()
}

#[test]
fn test_empty_query_returns_all_visible_in_order() {
    let items = sample_items();
    let result = filter(&items, &Query::new());
    let ids: Vec<&str> = result.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn test_uppercase_text_matches_description() {
    assert_eq!(titles(&Query::new().with_text("DENIM")), vec!["Vintage Denim Jacket"]);
}

#[test]
fn test_text_matches_tag_only() {
    // "feminine" is only a tag on the summer dress.
    assert_eq!(titles(&Query::new().with_text("FEMININE")), vec!["Floral Summer Dress"]);
}

#[test]
fn test_text_matches_description_only() {
    assert_eq!(titles(&Query::new().with_text("camel")), vec!["Wool Blend Coat"]);
}

#[test]
fn test_category_filter() {
    assert_eq!(
        titles(&Query::new().with_category(Category::Outerwear)),
        vec!["Vintage Denim Jacket", "Wool Blend Coat"]
    );
}

#[test]
fn test_size_filter_is_exact() {
    assert_eq!(titles(&Query::new().with_size("One Size")), vec!["Silk Scarf Collection"]);
    assert!(titles(&Query::new().with_size("one size")).is_empty());
}

#[test]
fn test_combined_filters() {
    let query = Query::new()
        .with_category(Category::Outerwear)
        .with_condition(Condition::Good)
        .with_size("L");
    assert_eq!(titles(&query), vec!["Wool Blend Coat"]);
}

#[test]
fn test_unapproved_and_unavailable_items_hidden() {
    let mut items = sample_items();
    items[0].is_approved = false;
    items[1].is_available = false;

    let result = filter(&items, &Query::new().with_text("d"));
    assert!(result.iter().all(|item| item.id != "1" && item.id != "2"));
}

#[test]
fn test_invalid_condition_value_matches_nothing() {
    let query = Query {
        condition: "mint".to_string(),
        ..Query::default()
    };
    assert!(titles(&query).is_empty());
}

#[test]
fn test_empty_catalog() {
    assert!(filter(&[], &Query::new().with_text("anything")).is_empty());
}
