// Rust guideline compliant 2026-02-06

//! Core data models for ReWear.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Size vocabulary offered when browsing and listing items.
pub const SIZES: [&str; 13] = [
    "XS", "S", "M", "L", "XL", "XXL", "6", "7", "8", "9", "10", "11", "12",
];

/// Product category of a listed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Shirts, blouses, sweaters.
    Tops,
    /// Trousers, jeans, skirts.
    Bottoms,
    /// Dresses of any length.
    Dresses,
    /// Jackets and coats.
    Outerwear,
    /// Footwear.
    Shoes,
    /// Scarves, bags, jewellery and the like.
    Accessories,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Category; 6] = [
        Category::Tops,
        Category::Bottoms,
        Category::Dresses,
        Category::Outerwear,
        Category::Shoes,
        Category::Accessories,
    ];

    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tops => "tops",
            Category::Bottoms => "bottoms",
            Category::Dresses => "dresses",
            Category::Outerwear => "outerwear",
            Category::Shoes => "shoes",
            Category::Accessories => "accessories",
        }
    }

    /// Returns the human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Tops => "Tops",
            Category::Bottoms => "Bottoms",
            Category::Dresses => "Dresses",
            Category::Outerwear => "Outerwear",
            Category::Shoes => "Shoes",
            Category::Accessories => "Accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| crate::Error::InvalidItem(format!("Unknown category: {}", s)))
    }
}

/// Physical condition of a listed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    /// New with tags.
    New,
    /// Barely worn.
    Excellent,
    /// Visible but light wear.
    Good,
    /// Noticeable wear.
    Fair,
}

impl Condition {
    /// Every condition from best to worst.
    pub const ALL: [Condition; 4] = [
        Condition::New,
        Condition::Excellent,
        Condition::Good,
        Condition::Fair,
    ];

    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::Excellent => "excellent",
            Condition::Good => "good",
            Condition::Fair => "fair",
        }
    }

    /// Returns the label shown on the listing form.
    pub fn label(&self) -> &'static str {
        match self {
            Condition::New => "New with tags",
            Condition::Excellent => "Excellent condition",
            Condition::Good => "Good condition",
            Condition::Fair => "Fair condition",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| crate::Error::InvalidItem(format!("Unknown condition: {}", s)))
    }
}

/// A garment listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Opaque unique identifier.
    pub id: String,
    /// One-line title.
    pub title: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Free-form garment type ("Jacket", "Midi Dress").
    #[serde(rename = "type", default)]
    pub item_type: String,
    /// Search tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Product category.
    pub category: Category,
    /// Size label, usually one of [`SIZES`].
    pub size: String,
    /// Physical condition.
    pub condition: Condition,
    /// Ordered image references; the first is the cover image.
    pub images: Vec<String>,
    /// ID of the uploading user.
    pub uploader_id: String,
    /// Display name of the uploading user.
    pub uploader_name: String,
    /// Avatar of the uploading user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploader_avatar: Option<String>,
    /// Points needed to redeem this item.
    pub points_value: u32,
    /// False once the item has been swapped away.
    pub is_available: bool,
    /// True only after a moderator approved the listing.
    pub is_approved: bool,
    /// Free-text pickup location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Date the listing was created.
    pub upload_date: NaiveDate,
}

impl Item {
    /// Returns true if browsing users may see this item.
    ///
    /// An item is visible only while it is both available and approved.
    pub fn is_visible(&self) -> bool {
        self.is_available && self.is_approved
    }

    /// Validates the item data.
    ///
    /// # Returns
    ///
    /// Ok if the item is well formed, Err otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - ID or title is blank
    /// - Uploader ID is blank
    /// - No image is attached
    pub fn validate(&self) -> crate::Result<()> {
        if self.id.trim().is_empty() {
            return Err(crate::Error::InvalidItem("ID cannot be empty".to_string()));
        }

        if self.title.trim().is_empty() {
            return Err(crate::Error::InvalidItem(format!(
                "Item {} has an empty title",
                self.id
            )));
        }

        if self.uploader_id.trim().is_empty() {
            return Err(crate::Error::InvalidItem(format!(
                "Item {} has no uploader",
                self.id
            )));
        }

        if self.images.is_empty() {
            return Err(crate::Error::InvalidItem(format!(
                "Item {} must have at least one image",
                self.id
            )));
        }

        Ok(())
    }
}

/// A registered member of the exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: String,
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Current points balance.
    pub points: u32,
    /// Avatar image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Free-text home location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Registration date.
    pub join_date: NaiveDate,
    /// Number of completed swaps.
    #[serde(default)]
    pub swap_count: u32,
}

impl User {
    /// Creates a freshly registered user with the given starting balance.
    pub fn new(
        id: String,
        email: String,
        name: String,
        starting_points: u32,
        join_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            email,
            name,
            points: starting_points,
            avatar: None,
            location: None,
            join_date,
            swap_count: 0,
        }
    }
}

/// Status of a swap request in the finite state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapStatus {
    /// Awaiting a response from the item owner.
    Pending,
    /// Owner agreed to the swap.
    Accepted,
    /// Owner refused the swap.
    Declined,
    /// Items or points have changed hands.
    Completed,
}

impl SwapStatus {
    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SwapStatus::Pending => "pending",
            SwapStatus::Accepted => "accepted",
            SwapStatus::Declined => "declined",
            SwapStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for SwapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the requester gives in exchange for the target item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SwapOffer {
    /// Direct item-for-item swap.
    Item {
        /// ID of the offered item.
        item_id: String,
        /// Title of the offered item.
        item_title: String,
    },
    /// Points-based redemption.
    Points {
        /// Points offered.
        amount: u32,
    },
}

/// A request to swap for a listed item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapRequest {
    /// Unique hash-based identifier (format: swp-XXXXXX).
    pub id: String,
    /// ID of the requesting user.
    pub requester_id: String,
    /// Display name of the requesting user.
    pub requester_name: String,
    /// ID of the requested item.
    pub item_id: String,
    /// Title of the requested item.
    pub item_title: String,
    /// Offered item or points.
    pub offer: SwapOffer,
    /// Current status in the FSM.
    pub status: SwapStatus,
    /// Note to the item owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Date the request was created.
    pub created_date: NaiveDate,
}

impl SwapRequest {
    /// Returns true for points-based requests.
    pub fn uses_points(&self) -> bool {
        matches!(self.offer, SwapOffer::Points { .. })
    }
}
