// Rust guideline compliant 2026-02-09

//! Shared application services for ReWear.
//!
//! This crate provides reusable, non-CLI-specific helpers for browsing,
//! swap requests, moderation, dashboards, page navigation, and
//! standardized response envelopes. Every service takes the caller's
//! [`Session`] explicitly instead of reading ambient auth state.

pub mod browse;
pub mod dashboard;
pub mod error;
pub mod moderation;
pub mod navigation;
pub mod response;
pub mod session;
pub mod swap;
pub mod time;

pub use browse::{browse, BrowseOptions};
pub use dashboard::{dashboard, DashboardSummary};
pub use error::{AppError, ErrorCode, Result};
pub use moderation::{approve_item, reject_item, submit_listing};
pub use navigation::{resolve, Page};
pub use response::ErrorEnvelope;
pub use session::Session;
pub use swap::{complete, eligibility, request_swap, respond, Eligibility, OfferChoice};
pub use time::today;
