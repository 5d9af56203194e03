// Rust guideline compliant 2026-02-06

//! Tests for output formatters.

use rewear_app::AppError;
use rewear_cli::output::format_failure;
use rewear_cli::{create_formatter, OutputFormatter};
use rewear_core::{sample, Item};

fn items() -> Vec<Item> {
    sample::sample_items()
}

#[test]
fn test_table_list_has_header_and_rows() {
    let items = items();
    let refs: Vec<&Item> = items.iter().collect();
    let output = create_formatter("table", false).format_list(&refs);

    assert!(output.contains("Condition"));
    assert!(output.contains("Vintage Denim Jacket"));
    assert!(output.contains("Silk Scarf Collection"));
    assert!(output.contains("One Size"));
}

#[test]
fn test_table_detail_shows_labels() {
    let items = items();
    let output = create_formatter("table", false).format_item(&items[0]);

    assert!(output.contains("Category:    Outerwear"));
    assert!(output.contains("Points:      75"));
    assert!(output.contains("Tags:        vintage, denim, casual, 90s"));
    assert!(!output.contains("Status:"));
}

#[test]
fn test_table_detail_marks_swapped_items() {
    let mut item = items().remove(0);
    item.is_available = false;
    let output = create_formatter("table", false).format_item(&item);
    assert!(output.contains("Status:      Swapped"));
}

#[test]
fn test_plain_list_is_tab_separated() {
    let items = items();
    let refs: Vec<&Item> = items.iter().take(2).collect();
    let output = create_formatter("plain", false).format_list(&refs);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "2\tFloral Summer Dress\tdresses\tS\texcellent\t90");
}

#[test]
fn test_json_list_has_total() {
    let items = items();
    let refs: Vec<&Item> = items.iter().collect();
    let output = create_formatter("json", false).format_list(&refs);
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["total"], 6);
    assert_eq!(json["items"][5]["category"], "accessories");
}

#[test]
fn test_error_formats() {
    assert_eq!(
        create_formatter("table", false).format_error("boom"),
        "Error: boom"
    );
    let json: serde_json::Value =
        serde_json::from_str(&create_formatter("json", false).format_error("boom")).unwrap();
    assert_eq!(json["error"], "boom");
}

#[test]
fn test_colored_error_keeps_message() {
    let output = create_formatter("table", true).format_error("boom");
    assert!(output.contains("Error: "));
    assert!(output.ends_with("boom"));
}

#[test]
fn test_unknown_format_falls_back_to_table() {
    let formatter = create_formatter("yaml", false);
    assert!(!formatter.is_json());
    assert_eq!(formatter.format_list(&[]), "No items found.");
}

#[test]
fn test_failure_in_json_mode_is_error_envelope() {
    let err = anyhow::Error::from(AppError::InsufficientPoints {
        required: 120,
        balance: 100,
    });
    let output = format_failure(&err, create_formatter("json", false).as_ref());
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["code"], "insufficient_points");
    assert_eq!(json["details"]["shortfall"], 20);
}

#[test]
fn test_failure_in_table_mode_keeps_context() {
    let err = anyhow::Error::from(AppError::Forbidden).context("Failed to list pending items");
    let output = format_failure(&err, create_formatter("table", false).as_ref());
    assert_eq!(
        output,
        "Error: Failed to list pending items: Moderator role required"
    );
}

#[test]
fn test_unexpected_failure_in_json_mode() {
    let err = anyhow::anyhow!("disk on fire");
    let output = format_failure(&err, create_formatter("json", false).as_ref());
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["error"], "disk on fire");
}

#[test]
fn test_json_item_is_bare_object() {
    let items = items();
    let output = create_formatter("json", false).format_item(&items[1]);
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["id"], "2");
    assert_eq!(json["points_value"], 90);
    assert!(json.get("result").is_none());
}
