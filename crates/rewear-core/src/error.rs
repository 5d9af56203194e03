// Rust guideline compliant 2026-02-06

//! Error types for the ReWear core library.

use thiserror::Error;

/// Result type alias for ReWear operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for ReWear operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A catalog line could not be parsed as an item.
    #[error("Malformed catalog line {line}: {source}")]
    Malformed {
        /// 1-based line number in the catalog file.
        line: usize,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// Invalid item data.
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    /// Listing submission failed validation.
    #[error("Invalid listing: {}", format_field_errors(.0))]
    InvalidListing(Vec<crate::listing::FieldError>),

    /// Item or request not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An item with the same ID already exists in the catalog.
    #[error("Duplicate item ID: {0}")]
    DuplicateId(String),

    /// Invalid swap request state transition.
    #[error("Invalid state transition: {0}")]
    InvalidTransition(String),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

fn format_field_errors(errors: &[crate::listing::FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}
