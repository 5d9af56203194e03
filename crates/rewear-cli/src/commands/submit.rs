// Rust guideline compliant 2026-02-06

//! Implementation of the `rewear submit` command.
//!
//! Validates a listing and shows the item it would create. The catalog
//! file is not modified.

use crate::terminal::print_success;
use crate::{Context, OutputFormatter};
use anyhow::Result;
use rewear_app::submit_listing;
use rewear_core::{Item, ListingDraft};

/// Submits a listing against a copy of the catalog.
///
/// # Returns
///
/// The pending item that moderation would review.
///
/// # Errors
///
/// Returns an error if the session is anonymous or any field is invalid.
pub fn run(ctx: &Context, draft: ListingDraft) -> Result<Item> {
    let mut catalog = ctx.catalog.clone();
    let item = submit_listing(&ctx.session, &mut catalog, draft, rewear_app::today())?;
    Ok(item)
}

/// Submits a listing and prints the resulting item.
///
/// # Errors
///
/// Returns an error if the session is anonymous or any field is invalid.
pub fn execute(ctx: &Context, draft: ListingDraft, formatter: &dyn OutputFormatter) -> Result<()> {
    let item = run(ctx, draft)?;
    println!("{}", formatter.format_item(&item));

    if !formatter.is_json() {
        print_success("Item submitted successfully! It will be reviewed by our team.");
    }
    Ok(())
}
