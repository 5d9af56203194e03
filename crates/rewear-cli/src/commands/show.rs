// Rust guideline compliant 2026-02-06

//! Implementation of the `rewear show` command.
//!
//! Displays an item together with the swap options open to the caller.

use crate::{Context, OutputFormatter};
use anyhow::Result;
use rewear_app::{eligibility, AppError, Eligibility, Session};
use rewear_core::{Error as CoreError, Item};
use serde_json::json;

/// Renders an item's details and swap options.
///
/// # Errors
///
/// Returns `AppError::Core(NotFound)` if no item has this ID.
pub fn run(ctx: &Context, id: &str, formatter: &dyn OutputFormatter) -> Result<String> {
    let item = ctx
        .catalog
        .get(id)
        .ok_or_else(|| AppError::from(CoreError::NotFound(id.to_string())))?;
    let options = eligibility(&ctx.session, item);

    if formatter.is_json() {
        let output = json!({
            "item": item,
            "eligibility": options,
        });
        return Ok(serde_json::to_string_pretty(&output)?);
    }

    let mut output = formatter.format_item(item);
    output.push_str(&describe(item, &options, &ctx.session));
    Ok(output)
}

/// Prints an item's details and swap options.
///
/// # Errors
///
/// Returns an error if no item has this ID.
pub fn execute(ctx: &Context, id: &str, formatter: &dyn OutputFormatter) -> Result<()> {
    println!("{}", run(ctx, id, formatter)?);
    Ok(())
}

fn describe(item: &Item, options: &Eligibility, session: &Session) -> String {
    let Some(user) = &session.user else {
        return "\nSign in to request a swap.".to_string();
    };
    if item.uploader_id == user.id {
        return "\nThis is your listing.".to_string();
    }
    if !item.is_approved {
        return "\nThis item is awaiting approval.".to_string();
    }
    if !options.can_request {
        return "\nThis item is no longer available.".to_string();
    }
    if options.can_use_points {
        "\nSwap options: direct swap, redeem with points".to_string()
    } else {
        format!(
            "\nSwap options: direct swap (need {} more points to redeem)",
            options.shortfall
        )
    }
}
