// Rust guideline compliant 2026-02-06

//! Implementation of the `rewear estimate` command.

use crate::OutputFormatter;
use anyhow::Result;
use rewear_core::valuation::estimate_points_raw;
use serde_json::json;

/// Renders the points estimate for a condition and category.
///
/// Unknown or missing values fall back to the default base and multiplier.
pub fn run(condition: &str, category: &str, formatter: &dyn OutputFormatter) -> Result<String> {
    let points = estimate_points_raw(condition, category);

    if formatter.is_json() {
        let output = json!({
            "condition": condition,
            "category": category,
            "points": points,
        });
        return Ok(serde_json::to_string_pretty(&output)?);
    }

    Ok(format!("Estimated points: {}", points))
}

/// Prints the points estimate for a condition and category.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(condition: &str, category: &str, formatter: &dyn OutputFormatter) -> Result<()> {
    println!("{}", run(condition, category, formatter)?);
    Ok(())
}
