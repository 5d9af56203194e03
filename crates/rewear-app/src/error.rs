// Rust guideline compliant 2026-02-09

//! Error handling for ReWear application services.

use rewear_core::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command and envelope responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested item or request was not found.
    NotFound,
    /// The requested state transition is invalid.
    InvalidTransition,
    /// Input validation failed.
    ValidationError,
    /// The caller must sign in first.
    NotAuthenticated,
    /// The caller lacks the required role.
    Forbidden,
    /// The item cannot be requested right now.
    NotEligible,
    /// The points balance does not cover the item.
    InsufficientPoints,
    /// IO failure while reading or writing catalog data.
    IoError,
    /// Configuration could not be loaded.
    ConfigError,
    /// The request included invalid inputs.
    InvalidInput,
    /// JSON serialization or parsing failed.
    JsonError,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The action needs a signed-in user.
    #[error("Sign in to continue")]
    NotAuthenticated,

    /// The action needs the moderator role.
    #[error("Moderator role required")]
    Forbidden,

    /// The item is not open to swap requests.
    #[error("Item {item_id} is not available for swapping")]
    NotEligible {
        /// Requested item.
        item_id: String,
    },

    /// The balance is lower than the item's points value.
    #[error("You need {} more points for this item", shortfall(.required, .balance))]
    InsufficientPoints {
        /// Points the item costs.
        required: u32,
        /// Points the user holds.
        balance: u32,
    },

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),
}

fn shortfall(required: &u32, balance: &u32) -> u32 {
    rewear_core::points_shortfall(*balance, *required)
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::NotAuthenticated => ErrorCode::NotAuthenticated,
            AppError::Forbidden => ErrorCode::Forbidden,
            AppError::NotEligible { .. } => ErrorCode::NotEligible,
            AppError::InsufficientPoints { .. } => ErrorCode::InsufficientPoints,
            AppError::Core(core) => match core {
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::InvalidTransition(_) => ErrorCode::InvalidTransition,
                CoreError::InvalidItem(_)
                | CoreError::InvalidListing(_)
                | CoreError::DuplicateId(_) => ErrorCode::ValidationError,
                CoreError::InvalidConfig(_) => ErrorCode::ConfigError,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) | CoreError::Malformed { .. } => ErrorCode::JsonError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::NotEligible { item_id } => Some(serde_json::json!({
                "item_id": item_id,
            })),
            AppError::InsufficientPoints { required, balance } => Some(serde_json::json!({
                "required": required,
                "balance": balance,
                "shortfall": shortfall(required, balance),
            })),
            AppError::Core(CoreError::InvalidListing(errors)) => Some(serde_json::json!({
                "fields": errors,
            })),
            AppError::Core(CoreError::Malformed { line, .. }) => Some(serde_json::json!({
                "line": line,
            })),
            _ => None,
        }
    }
}
