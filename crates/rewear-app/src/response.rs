// Rust guideline compliant 2026-02-09

//! Error envelope for command failures.

use crate::error::{AppError, ErrorCode};
use serde::Serialize;

/// Standard error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Stable error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// Creates a new error envelope from an application error.
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        Self {
            code: error.code(),
            message: error.to_string(),
            details: error.details(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_carries_shortfall() {
        let error = AppError::InsufficientPoints {
            required: 75,
            balance: 50,
        };
        let json = serde_json::to_value(ErrorEnvelope::from_error(&error)).unwrap();
        assert_eq!(json["code"], "insufficient_points");
        assert_eq!(json["message"], "You need 25 more points for this item");
        assert_eq!(json["details"]["shortfall"], 25);
    }
}
