// Rust guideline compliant 2026-02-06

//! Output formatting for the ReWear CLI.
//!
//! Items are rendered as JSON for machine consumption, as tables for
//! people, or as plain tab-separated lines for shell pipelines.

use rewear_app::{AppError, ErrorEnvelope};
use rewear_core::Item;
use serde_json::json;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

use crate::terminal::wrap_text;
use std::io::Write;

/// Label column width used by the detail view.
const LABEL_WIDTH: usize = 13;

/// Output formatter trait.
pub trait OutputFormatter {
    /// Formats a single item for display.
    fn format_item(&self, item: &Item) -> String;

    /// Formats a list of items for display.
    fn format_list(&self, items: &[&Item]) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;

    /// Returns true if this formatter emits JSON.
    fn is_json(&self) -> bool {
        false
    }
}

/// JSON output formatter.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_item(&self, item: &Item) -> String {
        serde_json::to_string_pretty(item)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize item" }).to_string())
    }

    fn format_list(&self, items: &[&Item]) -> String {
        let output = json!({
            "items": items,
            "total": items.len(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize item list" }).to_string())
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }

    fn is_json(&self) -> bool {
        true
    }
}

/// Table output formatter.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

fn detail_line(output: &mut String, label: &str, value: &str) {
    output.push_str(&format!("{:<width$}{}\n", format!("{label}:"), value, width = LABEL_WIDTH));
}

impl OutputFormatter for TableFormatter {
    fn format_item(&self, item: &Item) -> String {
        let mut output = String::new();

        detail_line(&mut output, "ID", &item.id);
        detail_line(&mut output, "Title", &item.title);
        detail_line(&mut output, "Category", item.category.label());
        detail_line(&mut output, "Type", &item.item_type);
        detail_line(&mut output, "Size", &item.size);
        detail_line(&mut output, "Condition", item.condition.label());
        detail_line(&mut output, "Points", &item.points_value.to_string());
        detail_line(&mut output, "Listed by", &item.uploader_name);
        detail_line(&mut output, "Listed on", &item.upload_date.to_string());

        if let Some(location) = &item.location {
            detail_line(&mut output, "Location", location);
        }
        if !item.tags.is_empty() {
            detail_line(&mut output, "Tags", &item.tags.join(", "));
        }
        if !item.is_available {
            detail_line(&mut output, "Status", "Swapped");
        } else if !item.is_approved {
            detail_line(&mut output, "Status", "Pending approval");
        }
        if !item.description.is_empty() {
            detail_line(
                &mut output,
                "Description",
                &wrap_text(&item.description, LABEL_WIDTH),
            );
        }

        output
    }

    fn format_list(&self, items: &[&Item]) -> String {
        if items.is_empty() {
            return "No items found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Title", "Category", "Size", "Condition", "Points"]);

        for item in items {
            builder.push_record(vec![
                item.id.clone(),
                item.title.clone(),
                item.category.label().to_string(),
                item.size.clone(),
                item.condition.label().to_string(),
                item.points_value.to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        if !self.use_color {
            return format!("Error: {}", error);
        }

        let mut buffer = Buffer::ansi();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
        let _ = write!(buffer, "Error: ");
        let _ = buffer.reset();
        let _ = write!(buffer, "{}", error);
        String::from_utf8_lossy(buffer.as_slice()).to_string()
    }
}

/// Plain text formatter for scripting.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_item(&self, item: &Item) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            item.id,
            item.title,
            item.category,
            item.size,
            item.condition,
            item.points_value
        )
    }

    fn format_list(&self, items: &[&Item]) -> String {
        items
            .iter()
            .map(|item| self.format_item(item))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Creates a formatter for the given format name.
///
/// # Arguments
/// * `format` - "json", "table" or "plain"; anything else falls back to table
/// * `use_color` - Whether to use colored output (ignored for JSON and plain)
pub fn create_formatter(format: &str, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter::new(use_color)),
    }
}

/// Renders a command failure.
///
/// In JSON mode application errors become an error envelope carrying the
/// stable code and details. Everything else goes through `format_error`
/// with its full context chain.
pub fn format_failure(err: &anyhow::Error, formatter: &dyn OutputFormatter) -> String {
    if formatter.is_json() {
        if let Some(app) = err.downcast_ref::<AppError>() {
            if let Ok(text) = serde_json::to_string_pretty(&ErrorEnvelope::from_error(app)) {
                return text;
            }
        }
    }
    formatter.format_error(&format!("{:#}", err))
}
