// Rust guideline compliant 2026-02-06

//! Implementation of the `rewear browse` command.

use crate::{Context, OutputFormatter};
use anyhow::Result;
use rewear_app::BrowseOptions;

/// Renders the visible items matching the browse filters.
///
/// # Arguments
///
/// * `ctx` - Loaded catalog and configuration
/// * `options` - Search text and category, size and condition filters
/// * `formatter` - The output formatter to use
pub fn run(ctx: &Context, options: &BrowseOptions, formatter: &dyn OutputFormatter) -> Result<String> {
    let items = rewear_app::browse(&ctx.catalog, options, ctx.config.parallel_threshold);
    Ok(formatter.format_list(&items))
}

/// Prints the visible items matching the browse filters.
///
/// # Errors
///
/// Returns an error if rendering fails.
pub fn execute(ctx: &Context, options: &BrowseOptions, formatter: &dyn OutputFormatter) -> Result<()> {
    println!("{}", run(ctx, options, formatter)?);
    Ok(())
}
