// Rust guideline compliant 2026-02-06

//! Implementation of the `rewear sizes` command.

use crate::OutputFormatter;
use anyhow::Result;
use rewear_core::SIZES;
use serde_json::json;

/// Renders the size vocabulary in display order.
pub fn run(formatter: &dyn OutputFormatter) -> Result<String> {
    if formatter.is_json() {
        return Ok(serde_json::to_string_pretty(&json!({ "sizes": SIZES }))?);
    }
    Ok(SIZES.join("\n"))
}

/// Prints the size vocabulary.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(formatter: &dyn OutputFormatter) -> Result<()> {
    println!("{}", run(formatter)?);
    Ok(())
}
