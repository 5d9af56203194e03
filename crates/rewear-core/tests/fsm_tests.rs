// Rust guideline compliant 2026-02-06

//! Unit tests for the swap request FSM.

use rewear_core::sample::sample_requests;
use rewear_core::{Error, SwapStatus};

const ALL_STATUSES: [SwapStatus; 4] = [
    SwapStatus::Pending,
    SwapStatus::Accepted,
    SwapStatus::Declined,
    SwapStatus::Completed,
];

#[test]
fn test_pending_can_be_accepted_or_declined() {
    assert!(SwapStatus::Pending.can_transition_to(SwapStatus::Accepted).is_ok());
    assert!(SwapStatus::Pending.can_transition_to(SwapStatus::Declined).is_ok());
}

#[test]
fn test_pending_cannot_skip_to_completed() {
    assert!(SwapStatus::Pending.can_transition_to(SwapStatus::Completed).is_err());
}

#[test]
fn test_accepted_only_completes() {
    assert_eq!(
        SwapStatus::Accepted.valid_transitions(),
        vec![SwapStatus::Completed]
    );
    assert!(SwapStatus::Accepted.can_transition_to(SwapStatus::Declined).is_err());
}

#[test]
fn test_terminal_states_have_no_exits() {
    for status in [SwapStatus::Declined, SwapStatus::Completed] {
        assert!(status.is_terminal());
        for target in ALL_STATUSES {
            assert!(
                status.can_transition_to(target).is_err(),
                "{:?} should not move to {:?}",
                status,
                target
            );
        }
    }
}

#[test]
fn test_no_state_returns_to_pending() {
    for status in ALL_STATUSES {
        assert!(!status.valid_transitions().contains(&SwapStatus::Pending));
    }
}

#[test]
fn test_transition_updates_request() {
    let mut request = sample_requests().remove(0);
    assert_eq!(request.status, SwapStatus::Pending);
    request.transition_to(SwapStatus::Accepted).unwrap();
    request.transition_to(SwapStatus::Completed).unwrap();
    assert_eq!(request.status, SwapStatus::Completed);
}

#[test]
fn test_failed_transition_leaves_request_unchanged() {
    let mut request = sample_requests().remove(0);
    let err = request.transition_to(SwapStatus::Completed).unwrap_err();
    assert!(matches!(err, Error::InvalidTransition(_)));
    assert_eq!(request.status, SwapStatus::Pending);
}
