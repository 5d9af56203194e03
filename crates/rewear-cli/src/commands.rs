// Rust guideline compliant 2026-02-06

//! Command implementations for the ReWear CLI.

pub mod afford;
pub mod browse;
pub mod estimate;
pub mod pending;
pub mod show;
pub mod sizes;
pub mod submit;
