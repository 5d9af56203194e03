// Rust guideline compliant 2026-02-09

//! Per-user dashboard summary.

use crate::error::Result;
use crate::session::Session;
use rewear_core::{Item, ItemCatalog, SwapRequest, SwapStatus};
use serde::Serialize;

/// What a signed-in user sees on their dashboard.
#[derive(Debug, Serialize)]
pub struct DashboardSummary<'a> {
    /// Points balance.
    pub points: u32,
    /// Completed swaps.
    pub swap_count: u32,
    /// Items the user listed, approved or not.
    pub items: Vec<&'a Item>,
    /// Requests the user made.
    pub outgoing: Vec<&'a SwapRequest>,
    /// Requests targeting the user's items.
    pub incoming: Vec<&'a SwapRequest>,
}

impl DashboardSummary<'_> {
    /// Counts incoming requests still awaiting an answer.
    pub fn pending_incoming(&self) -> usize {
        self.incoming
            .iter()
            .filter(|request| request.status == SwapStatus::Pending)
            .count()
    }
}

/// Builds the dashboard for the signed-in user.
///
/// # Errors
///
/// Returns `AppError::NotAuthenticated` for anonymous sessions.
pub fn dashboard<'a>(
    session: &Session,
    catalog: &'a ItemCatalog,
    requests: &'a [SwapRequest],
) -> Result<DashboardSummary<'a>> {
    let user = session.require_user()?;
    let items = catalog.uploaded_by(&user.id);

    let outgoing = requests
        .iter()
        .filter(|request| request.requester_id == user.id)
        .collect();
    let incoming = requests
        .iter()
        .filter(|request| items.iter().any(|item| item.id == request.item_id))
        .collect();

    Ok(DashboardSummary {
        points: user.points,
        swap_count: user.swap_count,
        items,
        outgoing,
        incoming,
    })
}
