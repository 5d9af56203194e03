// Rust guideline compliant 2026-02-06

//! Listing submission: validation of the "add item" form and conversion
//! into a catalog item awaiting moderation.

use crate::identity::{self, ITEM_PREFIX};
use crate::models::{Category, Condition, Item, User, SIZES};
use crate::valuation::estimate_points;
use crate::{Error, ItemCatalog, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single rejected form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Form field name.
    pub field: &'static str,
    /// Reason shown next to the field.
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Raw values of the listing form.
///
/// Category, size and condition arrive as the strings the form selected so
/// that an unchosen or unknown value can be reported per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingDraft {
    /// Item title.
    pub title: String,
    /// Item description.
    pub description: String,
    /// Category name.
    pub category: String,
    /// Free-form garment type.
    pub item_type: String,
    /// Size label from [`SIZES`].
    pub size: String,
    /// Condition name.
    pub condition: String,
    /// Comma-separated tags.
    pub tags: String,
    /// Optional pickup location.
    pub location: String,
    /// Attached image references.
    pub images: Vec<String>,
}

impl ListingDraft {
    /// Validates every field of the draft.
    ///
    /// # Returns
    ///
    /// All field errors, in form order. Empty when the draft is valid.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push(FieldError::new("title", "Title is required"));
        }
        if self.description.trim().is_empty() {
            errors.push(FieldError::new("description", "Description is required"));
        }
        if self.category.is_empty() {
            errors.push(FieldError::new("category", "Category is required"));
        } else if self.category.parse::<Category>().is_err() {
            errors.push(FieldError::new(
                "category",
                format!("Unknown category: {}", self.category),
            ));
        }
        if self.item_type.trim().is_empty() {
            errors.push(FieldError::new("type", "Type is required"));
        }
        if self.size.is_empty() {
            errors.push(FieldError::new("size", "Size is required"));
        } else if !SIZES.contains(&self.size.as_str()) {
            errors.push(FieldError::new("size", format!("Unknown size: {}", self.size)));
        }
        if self.condition.is_empty() {
            errors.push(FieldError::new("condition", "Condition is required"));
        } else if self.condition.parse::<Condition>().is_err() {
            errors.push(FieldError::new(
                "condition",
                format!("Unknown condition: {}", self.condition),
            ));
        }
        if self.images.is_empty() {
            errors.push(FieldError::new("images", "At least one image is required"));
        }

        errors
    }

    /// Converts a valid draft into an item awaiting moderation.
    ///
    /// # Arguments
    ///
    /// * `uploader` - The submitting user
    /// * `today` - Upload date
    /// * `catalog` - Catalog used to keep the generated ID unique
    ///
    /// # Returns
    ///
    /// An available but unapproved item.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidListing` with every field error if the draft
    /// fails validation.
    pub fn into_item(
        self,
        uploader: &User,
        today: NaiveDate,
        catalog: &ItemCatalog,
    ) -> Result<Item> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(Error::InvalidListing(errors));
        }

        let category: Category = self.category.parse()?;
        let condition: Condition = self.condition.parse()?;
        let title = self.title.trim().to_string();
        let date = today.to_string();
        let id = identity::generate_unique_id(
            ITEM_PREFIX,
            &[title.as_str(), uploader.id.as_str(), date.as_str()],
            |candidate| catalog.contains(candidate),
        );
        let location = self.location.trim();

        Ok(Item {
            id,
            title,
            description: self.description.trim().to_string(),
            item_type: self.item_type.trim().to_string(),
            tags: parse_tags(&self.tags),
            category,
            size: self.size,
            condition,
            images: self.images,
            uploader_id: uploader.id.clone(),
            uploader_name: uploader.name.clone(),
            uploader_avatar: uploader.avatar.clone(),
            points_value: estimate_points(Some(condition), Some(category)),
            is_available: true,
            is_approved: false,
            location: (!location.is_empty()).then(|| location.to_string()),
            upload_date: today,
        })
    }
}

/// Splits a comma-separated tag string, trimming and dropping blanks.
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|existing| existing == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}
