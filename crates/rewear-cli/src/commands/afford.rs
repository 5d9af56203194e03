// Rust guideline compliant 2026-02-06

//! Implementation of the `rewear afford` command.

use crate::{Context, OutputFormatter};
use anyhow::Result;
use rewear_app::AppError;
use rewear_core::{can_afford, points_shortfall, Error as CoreError};
use serde_json::json;

/// Renders whether the caller's balance covers an item.
///
/// # Errors
///
/// Returns an error if:
/// - The session is anonymous
/// - No item has this ID
pub fn run(ctx: &Context, id: &str, formatter: &dyn OutputFormatter) -> Result<String> {
    let user = ctx.session.require_user()?;
    let item = ctx
        .catalog
        .get(id)
        .ok_or_else(|| AppError::from(CoreError::NotFound(id.to_string())))?;

    let cost = item.points_value;
    let affordable = can_afford(Some(user.points), cost);
    let shortfall = points_shortfall(user.points, cost);

    if formatter.is_json() {
        let output = json!({
            "item_id": item.id,
            "cost": cost,
            "balance": user.points,
            "can_afford": affordable,
            "shortfall": shortfall,
        });
        return Ok(serde_json::to_string_pretty(&output)?);
    }

    if affordable {
        Ok(format!(
            "You can redeem {} for {} points (balance {})",
            item.title, cost, user.points
        ))
    } else {
        Ok(format!("You need {} more points for this item", shortfall))
    }
}

/// Prints whether the caller's balance covers an item.
///
/// # Errors
///
/// Returns an error if the session is anonymous or the item is unknown.
pub fn execute(ctx: &Context, id: &str, formatter: &dyn OutputFormatter) -> Result<()> {
    println!("{}", run(ctx, id, formatter)?);
    Ok(())
}
