// Rust guideline compliant 2026-02-06

//! Finite State Machine module for swap request status transitions.
//!
//! The FSM enforces the following transitions:
//!
//! - Pending → Accepted
//! - Pending → Declined
//! - Accepted → Completed
//!
//! Declined and Completed are terminal.

use crate::{Error, Result, SwapRequest, SwapStatus};

impl SwapStatus {
    /// Checks if a transition to the target status is valid.
    ///
    /// # Arguments
    ///
    /// * `target` - The target status to transition to
    ///
    /// # Returns
    ///
    /// Ok if the transition is valid, Err with descriptive message otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition is not in the valid transition set.
    pub fn can_transition_to(&self, target: SwapStatus) -> Result<()> {
        if self.valid_transitions().contains(&target) {
            return Ok(());
        }

        if self.is_terminal() {
            return Err(Error::InvalidTransition(format!(
                "Swap request is already {}",
                self
            )));
        }

        Err(Error::InvalidTransition(format!(
            "Cannot transition from {} to {}",
            self, target
        )))
    }

    /// Returns the list of valid target states for the current status.
    pub fn valid_transitions(&self) -> Vec<SwapStatus> {
        match self {
            SwapStatus::Pending => vec![SwapStatus::Accepted, SwapStatus::Declined],
            SwapStatus::Accepted => vec![SwapStatus::Completed],
            SwapStatus::Declined | SwapStatus::Completed => Vec::new(),
        }
    }

    /// Returns true if no further transition is possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SwapStatus::Declined | SwapStatus::Completed)
    }
}

impl SwapRequest {
    /// Moves the request to a new status.
    ///
    /// # Errors
    ///
    /// Returns an error if the FSM does not allow the transition; the
    /// request is left unchanged.
    pub fn transition_to(&mut self, target: SwapStatus) -> Result<()> {
        self.status.can_transition_to(target)?;
        self.status = target;
        Ok(())
    }
}
