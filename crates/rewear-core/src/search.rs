// Rust guideline compliant 2026-02-06

//! Search filtering over the item catalog.
//!
//! An item passes the filter only when it is visible (available and
//! approved), its title, description or one of its tags contains the search
//! text (case-insensitive), and its category, size and condition equal the
//! corresponding query values. The sentinel [`ALL`] matches any value.
//! Result order always follows input order.

use crate::models::{Category, Condition, Item};
use rayon::prelude::*;

/// Filter value that matches every item on its dimension.
pub const ALL: &str = "all";

/// Catalogs at or above this size are filtered in parallel by default.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1_000;

/// Free-text search plus structured filter criteria.
///
/// Structured filters are raw strings compared exactly against the item's
/// canonical values, so an unknown value simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Search text; empty matches everything.
    pub text: String,
    /// Category name or [`ALL`].
    pub category: String,
    /// Size label or [`ALL`].
    pub size: String,
    /// Condition name or [`ALL`].
    pub condition: String,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            text: String::new(),
            category: ALL.to_string(),
            size: ALL.to_string(),
            condition: ALL.to_string(),
        }
    }
}

impl Query {
    /// Creates a query matching every visible item.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Restricts results to one category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category.as_str().to_string();
        self
    }

    /// Restricts results to one size.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    /// Restricts results to one condition.
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = condition.as_str().to_string();
        self
    }

    /// Returns true if the item passes every criterion, visibility included.
    pub fn matches(&self, item: &Item) -> bool {
        self.matches_normalized(item, &self.text.to_lowercase())
    }

    fn matches_normalized(&self, item: &Item, needle: &str) -> bool {
        item.is_visible()
            && matches_text(item, needle)
            && dimension_matches(&self.category, item.category.as_str())
            && dimension_matches(&self.size, &item.size)
            && dimension_matches(&self.condition, item.condition.as_str())
    }
}

fn dimension_matches(filter: &str, value: &str) -> bool {
    filter == ALL || filter == value
}

fn matches_text(item: &Item, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    item.title.to_lowercase().contains(needle)
        || item.description.to_lowercase().contains(needle)
        || item.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

/// Computes the items visible under a query.
///
/// # Arguments
///
/// * `items` - Catalog snapshot, in display order
/// * `query` - Search text and filter criteria
///
/// # Returns
///
/// The matching items, in the same relative order as `items`.
pub fn filter<'a>(items: &'a [Item], query: &Query) -> Vec<&'a Item> {
    filter_with_threshold(items, query, DEFAULT_PARALLEL_THRESHOLD)
}

/// Computes the items visible under a query, parallelising large inputs.
///
/// # Arguments
///
/// * `items` - Catalog snapshot, in display order
/// * `query` - Search text and filter criteria
/// * `parallel_threshold` - Minimum input size filtered with rayon
///
/// # Returns
///
/// The matching items, in the same relative order as `items`.
pub fn filter_with_threshold<'a>(
    items: &'a [Item],
    query: &Query,
    parallel_threshold: usize,
) -> Vec<&'a Item> {
    let needle = query.text.to_lowercase();
    let predicate = |item: &&Item| query.matches_normalized(item, &needle);

    if items.len() >= parallel_threshold {
        items.par_iter().filter(predicate).collect()
    } else {
        items.iter().filter(predicate).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_item(id: &str, title: &str) -> Item {
        Item {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            item_type: "Jacket".to_string(),
            tags: Vec::new(),
            category: Category::Outerwear,
            size: "M".to_string(),
            condition: Condition::Good,
            images: vec!["cover.jpg".to_string()],
            uploader_id: "u1".to_string(),
            uploader_name: "Uploader".to_string(),
            uploader_avatar: None,
            points_value: 75,
            is_available: true,
            is_approved: true,
            location: None,
            upload_date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
        }
    }

    #[test]
    fn test_tag_match_is_case_insensitive() {
        let mut item = sample_item("1", "Jacket");
        item.tags = vec!["Vintage".to_string()];
        let items = vec![item];
        let query = Query::new().with_text("vINtage");
        assert_eq!(filter(&items, &query).len(), 1);
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let items = vec![sample_item("1", "Jacket")];
        let query = Query {
            category: "Outerwear".to_string(),
            ..Query::default()
        };
        assert!(filter(&items, &query).is_empty());
    }

    #[test]
    fn test_parallel_path_preserves_order() {
        let items: Vec<Item> = (0..50)
            .map(|i| {
                let mut item = sample_item(&i.to_string(), "Coat");
                item.is_approved = i % 3 != 0;
                item
            })
            .collect();
        let sequential = filter_with_threshold(&items, &Query::new(), usize::MAX);
        let parallel = filter_with_threshold(&items, &Query::new(), 1);
        assert_eq!(sequential, parallel);
    }
}
