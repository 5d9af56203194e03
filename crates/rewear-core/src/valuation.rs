// Rust guideline compliant 2026-02-06

//! Point valuation and swap eligibility rules.
//!
//! Point estimates are `base(condition) × multiplier(category)` rounded half
//! up. Multipliers are held in tenths so the computation stays in integers.

use crate::models::{Category, Condition, Item};

/// Base points used when the condition is missing or unknown.
pub const DEFAULT_BASE_POINTS: u32 = 60;

/// Multiplier, in tenths, used when the category is missing or unknown.
pub const DEFAULT_MULTIPLIER_TENTHS: u32 = 10;

/// Returns the base point value for a condition.
pub fn base_points(condition: Condition) -> u32 {
    match condition {
        Condition::New => 100,
        Condition::Excellent => 80,
        Condition::Good => 60,
        Condition::Fair => 40,
    }
}

/// Returns the category multiplier in tenths (15 means ×1.5).
pub fn multiplier_tenths(category: Category) -> u32 {
    match category {
        Category::Outerwear => 15,
        Category::Dresses => 13,
        Category::Shoes => 12,
        Category::Bottoms => 11,
        Category::Tops => 10,
        Category::Accessories => 8,
    }
}

/// Estimates the point value of a new listing.
///
/// # Arguments
///
/// * `condition` - Item condition, if chosen
/// * `category` - Item category, if chosen
///
/// # Returns
///
/// The estimate rounded half up to the nearest point.
pub fn estimate_points(condition: Option<Condition>, category: Option<Category>) -> u32 {
    let base = condition.map_or(DEFAULT_BASE_POINTS, base_points);
    let tenths = category.map_or(DEFAULT_MULTIPLIER_TENTHS, multiplier_tenths);
    (base * tenths + 5) / 10
}

/// Estimates the point value from raw form values.
///
/// Unrecognised names fall back to the defaults rather than failing.
pub fn estimate_points_raw(condition: &str, category: &str) -> u32 {
    estimate_points(condition.parse().ok(), category.parse().ok())
}

/// Decides whether a balance covers a points-based swap.
///
/// # Arguments
///
/// * `user_points` - Balance of the authenticated user, `None` when anonymous
/// * `item_points_value` - Points required by the item
///
/// # Returns
///
/// True if the user is present and the balance is at least the item value.
pub fn can_afford(user_points: Option<u32>, item_points_value: u32) -> bool {
    user_points.is_some_and(|points| points >= item_points_value)
}

/// Returns how many more points are needed, zero if affordable.
pub fn points_shortfall(user_points: u32, item_points_value: u32) -> u32 {
    item_points_value.saturating_sub(user_points)
}

/// Decides whether a swap request may be submitted for an item.
///
/// Approval is enforced upstream by the search filter. Availability is
/// re-checked because it can change between listing and request.
pub fn is_swap_eligible(item: &Item, is_authenticated: bool) -> bool {
    is_authenticated && item.is_available
}
