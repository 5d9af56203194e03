// Rust guideline compliant 2026-02-06

//! Implementation of the `rewear pending` command.

use crate::{Context, OutputFormatter};
use anyhow::Result;

/// Renders the listings awaiting moderation.
///
/// # Errors
///
/// Returns an error unless the session belongs to a moderator.
pub fn run(ctx: &Context, formatter: &dyn OutputFormatter) -> Result<String> {
    ctx.session.require_admin()?;
    let items = ctx.catalog.pending_approval();
    Ok(formatter.format_list(&items))
}

/// Prints the listings awaiting moderation.
///
/// # Errors
///
/// Returns an error unless the session belongs to a moderator.
pub fn execute(ctx: &Context, formatter: &dyn OutputFormatter) -> Result<()> {
    println!("{}", run(ctx, formatter)?);
    Ok(())
}
