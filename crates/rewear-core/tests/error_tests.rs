// Rust guideline compliant 2026-02-06

//! Unit tests for error types and messages.

use rewear_core::{Error, ListingDraft};

#[test]
fn test_io_error_formatting() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let msg = Error::Io(io_err).to_string();
    assert!(msg.contains("IO error"));
}

#[test]
fn test_malformed_line_formatting() {
    let source = serde_json::from_str::<serde_json::Value>("{oops")
        .expect_err("Should fail to parse invalid JSON");
    let msg = Error::Malformed { line: 12, source }.to_string();
    assert!(msg.starts_with("Malformed catalog line 12:"));
}

#[test]
fn test_not_found_formatting() {
    let error = Error::NotFound("itm-abc123".to_string());
    assert_eq!(error.to_string(), "Not found: itm-abc123");
}

#[test]
fn test_invalid_listing_lists_fields() {
    let errors = ListingDraft {
        title: "Shirt".to_string(),
        description: "Linen".to_string(),
        item_type: "Shirt".to_string(),
        size: "M".to_string(),
        condition: "good".to_string(),
        images: vec!["a.jpg".to_string()],
        ..ListingDraft::default()
    }
    .validate();
    let msg = Error::InvalidListing(errors).to_string();
    assert_eq!(msg, "Invalid listing: category: Category is required");
}

#[test]
fn test_invalid_transition_formatting() {
    let error = Error::InvalidTransition("Swap request is already declined".to_string());
    assert!(error.to_string().contains("already declined"));
}
