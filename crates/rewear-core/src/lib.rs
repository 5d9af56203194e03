// Rust guideline compliant 2026-02-06

//! ReWear Core Library
//!
//! This crate provides the foundational components for the ReWear clothing
//! exchange:
//! - Data models (Item, User, SwapRequest, Category, Condition)
//! - Item catalog (ingestion, lookup, moderation lifecycle)
//! - Search filtering over the visible catalog
//! - Point valuation and swap eligibility rules
//! - FSM logic for swap request status transitions
//! - Listing submission validation
//! - Hash ID generation
//! - Error types and result handling

pub mod catalog;
pub mod config;
pub mod error;
pub mod fsm;
pub mod identity;
pub mod listing;
pub mod models;
pub mod sample;
pub mod search;
pub mod valuation;

pub use catalog::ItemCatalog;
pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use listing::{FieldError, ListingDraft};
pub use models::{Category, Condition, Item, SwapOffer, SwapRequest, SwapStatus, User, SIZES};
pub use search::{filter, Query};
pub use valuation::{can_afford, estimate_points, is_swap_eligible, points_shortfall};
