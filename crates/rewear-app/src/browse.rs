// Rust guideline compliant 2026-02-09

//! Browsing helpers: string-typed filter options over the visible catalog.

use rewear_core::search::{self, Query, ALL};
use rewear_core::{Item, ItemCatalog};

/// Browse options as they arrive from a form or command line.
///
/// `None` and the literal `"all"` both leave a dimension unfiltered.
/// Values are compared exactly, so an unknown category, size or condition
/// yields no results rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseOptions {
    /// Free-text search.
    pub search: Option<String>,
    /// Category name.
    pub category: Option<String>,
    /// Size label.
    pub size: Option<String>,
    /// Condition name.
    pub condition: Option<String>,
}

impl BrowseOptions {
    /// Converts the options into a search query.
    pub fn to_query(&self) -> Query {
        let or_all = |value: &Option<String>| value.clone().unwrap_or_else(|| ALL.to_string());
        Query {
            text: self.search.clone().unwrap_or_default(),
            category: or_all(&self.category),
            size: or_all(&self.size),
            condition: or_all(&self.condition),
        }
    }
}

/// Lists the catalog items a browsing user can see.
///
/// # Arguments
///
/// * `catalog` - Catalog snapshot
/// * `options` - Browse filters
/// * `parallel_threshold` - Catalog size at which filtering runs in parallel
///
/// # Returns
///
/// Visible matching items in catalog order.
pub fn browse<'a>(
    catalog: &'a ItemCatalog,
    options: &BrowseOptions,
    parallel_threshold: usize,
) -> Vec<&'a Item> {
    let query = options.to_query();
    let items = search::filter_with_threshold(catalog.all(), &query, parallel_threshold);
    tracing::debug!(
        total = catalog.len(),
        matched = items.len(),
        text = %query.text,
        category = %query.category,
        size = %query.size,
        condition = %query.condition,
        "browse"
    );
    items
}
