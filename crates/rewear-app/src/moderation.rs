// Rust guideline compliant 2026-02-09

//! Listing submission and moderation services.

use crate::error::Result;
use crate::session::Session;
use chrono::NaiveDate;
use rewear_core::{Item, ItemCatalog, ListingDraft};

/// Submits a listing for moderation.
///
/// # Arguments
///
/// * `session` - Submitting session
/// * `catalog` - Catalog receiving the pending item
/// * `draft` - Listing form values
/// * `today` - Upload date
///
/// # Returns
///
/// The stored item, available but not yet approved.
///
/// # Errors
///
/// Returns an error if the session is anonymous or the draft is invalid.
pub fn submit_listing(
    session: &Session,
    catalog: &mut ItemCatalog,
    draft: ListingDraft,
    today: NaiveDate,
) -> Result<Item> {
    let user = session.require_user()?;
    let item = draft.into_item(user, today, catalog)?;
    catalog.insert(item.clone())?;

    tracing::info!(item = %item.id, points = item.points_value, "listing submitted for review");
    Ok(item)
}

/// Approves a pending listing, making it visible to browsers.
///
/// # Errors
///
/// Returns an error if the session is not a moderator or the item is unknown.
pub fn approve_item(session: &Session, catalog: &mut ItemCatalog, id: &str) -> Result<Item> {
    let moderator = session.require_admin()?;
    let item = catalog.approve(id)?.clone();

    tracing::info!(item = %item.id, moderator = %moderator.id, "item approved");
    Ok(item)
}

/// Rejects a listing, removing it from the catalog.
///
/// # Errors
///
/// Returns an error if the session is not a moderator or the item is unknown.
pub fn reject_item(session: &Session, catalog: &mut ItemCatalog, id: &str) -> Result<Item> {
    let moderator = session.require_admin()?;
    let item = catalog.reject(id)?;

    tracing::info!(item = %item.id, moderator = %moderator.id, "item rejected");
    Ok(item)
}
