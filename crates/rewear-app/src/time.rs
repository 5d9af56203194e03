// Rust guideline compliant 2026-02-09

//! Date helpers for ReWear.

use chrono::{Local, NaiveDate};

/// Returns the current local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
