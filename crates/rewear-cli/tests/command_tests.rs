// Rust guideline compliant 2026-02-06

//! Integration tests for CLI commands.

use rewear_app::{AppError, BrowseOptions, ErrorCode};
use rewear_cli::commands;
use rewear_cli::context::demo_session;
use rewear_cli::{create_formatter, Context};
use rewear_core::{sample, Config, ItemCatalog, ListingDraft};
use std::fs;
use tempfile::TempDir;

fn member_context() -> Context {
    Context::with_catalog(
        Config::default(),
        sample::sample_catalog(),
        demo_session(false, false, None),
    )
}

fn context_with(anonymous: bool, admin: bool, points: Option<u32>) -> Context {
    Context::with_catalog(
        Config::default(),
        sample::sample_catalog(),
        demo_session(anonymous, admin, points),
    )
}

fn app_code(err: &anyhow::Error) -> ErrorCode {
    err.downcast_ref::<AppError>()
        .map(AppError::code)
        .expect("Expected an application error")
}

#[test]
fn test_browse_json_lists_matching_items() {
    let ctx = member_context();
    let formatter = create_formatter("json", false);
    let options = BrowseOptions {
        search: Some("denim".to_string()),
        ..BrowseOptions::default()
    };

    let output = commands::browse::run(&ctx, &options, formatter.as_ref()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["total"], 1);
    assert_eq!(json["items"][0]["id"], "1");
    assert_eq!(json["items"][0]["type"], "Jacket");
}

#[test]
fn test_browse_unknown_category_yields_nothing() {
    let ctx = member_context();
    let formatter = create_formatter("table", false);
    let options = BrowseOptions {
        category: Some("hats".to_string()),
        ..BrowseOptions::default()
    };

    let output = commands::browse::run(&ctx, &options, formatter.as_ref()).unwrap();
    assert_eq!(output, "No items found.");
}

#[test]
fn test_show_includes_eligibility() {
    let ctx = context_with(false, false, Some(100));
    let formatter = create_formatter("json", false);

    let output = commands::show::run(&ctx, "4", formatter.as_ref()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["item"]["title"], "Wool Blend Coat");
    assert_eq!(json["eligibility"]["can_request"], true);
    assert_eq!(json["eligibility"]["can_use_points"], false);
    assert_eq!(json["eligibility"]["shortfall"], 20);
}

#[test]
fn test_show_table_for_anonymous_prompts_sign_in() {
    let ctx = context_with(true, false, None);
    let formatter = create_formatter("table", false);

    let output = commands::show::run(&ctx, "1", formatter.as_ref()).unwrap();
    assert!(output.contains("Vintage Denim Jacket"));
    assert!(output.ends_with("Sign in to request a swap."));
}

#[test]
fn test_show_pending_item_offers_no_swap() {
    let items = sample::sample_items()
        .into_iter()
        .map(|mut item| {
            item.is_approved = item.id != "4";
            item
        })
        .collect();
    let ctx = Context::with_catalog(
        Config::default(),
        ItemCatalog::from_items(items).unwrap(),
        demo_session(false, false, Some(500)),
    );

    let table = create_formatter("table", false);
    let output = commands::show::run(&ctx, "4", table.as_ref()).unwrap();
    assert!(output.ends_with("This item is awaiting approval."));

    let json = create_formatter("json", false);
    let output = commands::show::run(&ctx, "4", json.as_ref()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["eligibility"]["can_request"], false);
}

#[test]
fn test_show_unknown_item_is_not_found() {
    let ctx = member_context();
    let formatter = create_formatter("table", false);

    let err = commands::show::run(&ctx, "missing", formatter.as_ref()).unwrap_err();
    assert_eq!(app_code(&err), ErrorCode::NotFound);
}

#[test]
fn test_afford_reports_shortfall() {
    let ctx = context_with(false, false, Some(100));
    let formatter = create_formatter("table", false);

    let output = commands::afford::run(&ctx, "4", formatter.as_ref()).unwrap();
    assert_eq!(output, "You need 20 more points for this item");

    let output = commands::afford::run(&ctx, "3", formatter.as_ref()).unwrap();
    assert!(output.starts_with("You can redeem Classic White Sneakers"));
}

#[test]
fn test_afford_requires_sign_in() {
    let ctx = context_with(true, false, None);
    let formatter = create_formatter("json", false);

    let err = commands::afford::run(&ctx, "1", formatter.as_ref()).unwrap_err();
    assert_eq!(app_code(&err), ErrorCode::NotAuthenticated);
}

#[test]
fn test_estimate_json() {
    let formatter = create_formatter("json", false);
    let output = commands::estimate::run("new", "outerwear", formatter.as_ref()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["points"], 150);

    let formatter = create_formatter("plain", false);
    let output = commands::estimate::run("", "", formatter.as_ref()).unwrap();
    assert_eq!(output, "Estimated points: 60");
}

#[test]
fn test_submit_creates_pending_item_without_touching_catalog() {
    let ctx = member_context();
    let draft = ListingDraft {
        title: "Corduroy Trousers".to_string(),
        description: "Brown, wide leg".to_string(),
        category: "bottoms".to_string(),
        item_type: "Trousers".to_string(),
        size: "M".to_string(),
        condition: "good".to_string(),
        tags: "corduroy".to_string(),
        location: String::new(),
        images: vec!["front.jpg".to_string()],
    };

    let item = commands::submit::run(&ctx, draft).unwrap();

    assert!(!item.is_approved);
    assert_eq!(item.points_value, 66);
    assert_eq!(item.uploader_id, "1");
    assert_eq!(ctx.catalog.len(), 6);
}

#[test]
fn test_submit_invalid_listing_is_validation_error() {
    let ctx = member_context();
    let err = commands::submit::run(&ctx, ListingDraft::default()).unwrap_err();
    assert_eq!(app_code(&err), ErrorCode::ValidationError);
}

#[test]
fn test_pending_requires_moderator() {
    let formatter = create_formatter("table", false);

    let err = commands::pending::run(&member_context(), formatter.as_ref()).unwrap_err();
    assert_eq!(app_code(&err), ErrorCode::Forbidden);

    let output = commands::pending::run(&context_with(false, true, None), formatter.as_ref())
        .unwrap();
    assert_eq!(output, "No items found.");
}

#[test]
fn test_sizes_in_display_order() {
    let formatter = create_formatter("plain", false);
    let output = commands::sizes::run(formatter.as_ref()).unwrap();
    let sizes: Vec<&str> = output.lines().collect();
    assert_eq!(sizes.len(), 13);
    assert_eq!(sizes[0], "XS");
    assert_eq!(sizes[12], "12");
}

#[test]
fn test_context_loads_configured_catalog() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let items: Vec<_> = sample::sample_items().into_iter().take(2).collect();
    let catalog = ItemCatalog::from_items(items).unwrap();
    let file = fs::File::create(temp_dir.path().join("catalog.jsonl")).unwrap();
    catalog.save_jsonl(file).unwrap();

    let ctx = Context::load(
        Config::default(),
        temp_dir.path(),
        None,
        demo_session(false, false, None),
    )
    .unwrap();

    assert_eq!(ctx.catalog.len(), 2);
}

#[test]
fn test_context_falls_back_to_demo_catalog() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let ctx = Context::load(
        Config::default(),
        temp_dir.path(),
        None,
        demo_session(true, false, None),
    )
    .unwrap();

    assert_eq!(ctx.catalog, sample::sample_catalog());
}

#[test]
fn test_context_explicit_missing_catalog_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("nope.jsonl");

    let err = Context::load(
        Config::default(),
        temp_dir.path(),
        Some(&missing),
        demo_session(false, false, None),
    )
    .unwrap_err();

    assert_eq!(app_code(&err), ErrorCode::IoError);
}
