// Rust guideline compliant 2026-02-09

//! Swap request services: eligibility, submission, responses, completion.

use crate::error::{AppError, Result};
use crate::session::Session;
use chrono::NaiveDate;
use rewear_core::identity::{self, SWAP_PREFIX};
use rewear_core::{
    can_afford, is_swap_eligible, points_shortfall, Error as CoreError, Item, ItemCatalog,
    SwapOffer, SwapRequest, SwapStatus,
};
use serde::Serialize;

/// What the requester chooses to give.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfferChoice {
    /// Offer one of the requester's own listed items, by ID.
    Item(String),
    /// Redeem the item's points value.
    Points,
}

/// Swap options open to a session for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Eligibility {
    /// A swap request may be submitted.
    pub can_request: bool,
    /// The points balance covers the item.
    pub can_use_points: bool,
    /// Points still missing for a points swap.
    pub shortfall: u32,
}

/// Computes the swap options a session has for an item.
///
/// `can_request` holds exactly when `request_swap` would accept the item:
/// it must be approved, available and listed by someone else.
pub fn eligibility(session: &Session, item: &Item) -> Eligibility {
    let points = session.points();
    let owns_item = session
        .user
        .as_ref()
        .is_some_and(|user| user.id == item.uploader_id);
    Eligibility {
        can_request: item.is_approved
            && !owns_item
            && is_swap_eligible(item, session.is_authenticated()),
        can_use_points: can_afford(points, item.points_value),
        shortfall: points_shortfall(points.unwrap_or(0), item.points_value),
    }
}

/// Creates a pending swap request.
///
/// # Arguments
///
/// * `session` - Requesting session
/// * `catalog` - Catalog holding the target and any offered item
/// * `item_id` - ID of the requested item
/// * `offer` - Offered item or points
/// * `message` - Optional note to the owner
/// * `today` - Request date
/// * `existing` - Known requests, used to keep the generated ID unique
///
/// # Returns
///
/// The new request in the pending state.
///
/// # Errors
///
/// Returns an error if:
/// - The session is anonymous
/// - Either item is not in the catalog
/// - The target item belongs to the requester
/// - The target item is unapproved or already swapped
/// - A points offer exceeds the balance
/// - An offered item is not the requester's or is no longer available
pub fn request_swap(
    session: &Session,
    catalog: &ItemCatalog,
    item_id: &str,
    offer: OfferChoice,
    message: Option<String>,
    today: NaiveDate,
    existing: &[SwapRequest],
) -> Result<SwapRequest> {
    let user = session.require_user()?;
    let item = catalog
        .get(item_id)
        .ok_or_else(|| CoreError::NotFound(item_id.to_string()))?;

    if item.uploader_id == user.id {
        return Err(AppError::InvalidInput(
            "You cannot request your own item".to_string(),
        ));
    }

    if !item.is_approved || !is_swap_eligible(item, true) {
        return Err(AppError::NotEligible {
            item_id: item.id.clone(),
        });
    }

    let offer = match offer {
        OfferChoice::Points => {
            if !can_afford(Some(user.points), item.points_value) {
                return Err(AppError::InsufficientPoints {
                    required: item.points_value,
                    balance: user.points,
                });
            }
            SwapOffer::Points {
                amount: item.points_value,
            }
        }
        OfferChoice::Item(offered_id) => {
            let offered = catalog
                .get(&offered_id)
                .ok_or_else(|| CoreError::NotFound(offered_id.clone()))?;
            if offered.uploader_id != user.id {
                return Err(AppError::InvalidInput(format!(
                    "Item {} is not yours to offer",
                    offered.id
                )));
            }
            if !offered.is_available {
                return Err(AppError::InvalidInput(format!(
                    "Item {} has already been swapped",
                    offered.id
                )));
            }
            SwapOffer::Item {
                item_id: offered.id.clone(),
                item_title: offered.title.clone(),
            }
        }
    };

    let date = today.to_string();
    let id = identity::generate_unique_id(
        SWAP_PREFIX,
        &[user.id.as_str(), item.id.as_str(), date.as_str()],
        |candidate| existing.iter().any(|request| request.id == candidate),
    );

    let request = SwapRequest {
        id,
        requester_id: user.id.clone(),
        requester_name: user.name.clone(),
        item_id: item.id.clone(),
        item_title: item.title.clone(),
        offer,
        status: SwapStatus::Pending,
        message: message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty()),
        created_date: today,
    };

    tracing::info!(
        request = %request.id,
        item = %request.item_id,
        points = request.uses_points(),
        "swap requested"
    );
    Ok(request)
}

/// Accepts or declines a pending request on behalf of the item owner.
///
/// # Errors
///
/// Returns an error if the session is anonymous, the caller does not own
/// the requested item, or the request is no longer pending.
pub fn respond(
    session: &Session,
    catalog: &ItemCatalog,
    request: &mut SwapRequest,
    accept: bool,
) -> Result<()> {
    let user = session.require_user()?;
    let item = catalog
        .get(&request.item_id)
        .ok_or_else(|| CoreError::NotFound(request.item_id.clone()))?;
    if item.uploader_id != user.id {
        return Err(AppError::Forbidden);
    }

    let target = if accept {
        SwapStatus::Accepted
    } else {
        SwapStatus::Declined
    };
    request.transition_to(target)?;

    tracing::info!(request = %request.id, status = %request.status, "swap request answered");
    Ok(())
}

/// Completes an accepted request and takes the exchanged items off the
/// market.
///
/// # Errors
///
/// Returns an error if the request is not accepted or an exchanged item
/// is missing from the catalog. The request is left unchanged on error.
pub fn complete(catalog: &mut ItemCatalog, request: &mut SwapRequest) -> Result<()> {
    request.status.can_transition_to(SwapStatus::Completed)?;

    if !catalog.contains(&request.item_id) {
        return Err(CoreError::NotFound(request.item_id.clone()).into());
    }
    if let SwapOffer::Item { item_id, .. } = &request.offer {
        if !catalog.contains(item_id) {
            return Err(CoreError::NotFound(item_id.clone()).into());
        }
        catalog.mark_swapped(item_id)?;
    }
    catalog.mark_swapped(&request.item_id)?;
    request.transition_to(SwapStatus::Completed)?;

    tracing::info!(request = %request.id, "swap completed");
    Ok(())
}
