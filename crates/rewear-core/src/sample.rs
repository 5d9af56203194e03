// Rust guideline compliant 2026-02-06

//! Built-in demo catalog used when no catalog file is configured.

use crate::models::{Category, Condition, Item, SwapOffer, SwapRequest, SwapStatus, User};
use crate::ItemCatalog;
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn photo(id: u32) -> String {
    format!("https://images.pexels.com/photos/{id}/pexels-photo-{id}.jpeg")
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    title: &str,
    description: &str,
    category: Category,
    item_type: &str,
    size: &str,
    condition: Condition,
    tags: &[&str],
    images: Vec<String>,
    uploader: (&str, &str),
    points_value: u32,
    upload_date: NaiveDate,
    location: &str,
) -> Item {
    Item {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        item_type: item_type.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        category,
        size: size.to_string(),
        condition,
        images,
        uploader_id: uploader.0.to_string(),
        uploader_name: uploader.1.to_string(),
        uploader_avatar: None,
        points_value,
        is_available: true,
        is_approved: true,
        location: Some(location.to_string()),
        upload_date,
    }
}

/// Returns the demo items in display order.
pub fn sample_items() -> Vec<Item> {
    vec![
        item(
            "1",
            "Vintage Denim Jacket",
            "Classic blue denim jacket from the 90s. Perfectly worn-in with beautiful fading. Great for layering!",
            Category::Outerwear,
            "Jacket",
            "M",
            Condition::Good,
            &["vintage", "denim", "casual", "90s"],
            vec![photo(1598507), photo(1598508)],
            ("2", "Sarah Chen"),
            75,
            date(2024, 1, 20),
            "Brooklyn, NY",
        ),
        item(
            "2",
            "Floral Summer Dress",
            "Beautiful floral midi dress perfect for summer occasions. Lightweight and comfortable with a flattering fit.",
            Category::Dresses,
            "Midi Dress",
            "S",
            Condition::Excellent,
            &["floral", "summer", "midi", "feminine"],
            vec![photo(985635)],
            ("3", "Emma Rodriguez"),
            90,
            date(2024, 1, 22),
            "Los Angeles, CA",
        ),
        item(
            "3",
            "Classic White Sneakers",
            "Clean white leather sneakers. Minimal wear, perfect for everyday casual looks.",
            Category::Shoes,
            "Sneakers",
            "8",
            Condition::Excellent,
            &["white", "sneakers", "casual", "leather"],
            vec![photo(2529148)],
            ("4", "Alex Johnson"),
            60,
            date(2024, 1, 18),
            "Seattle, WA",
        ),
        item(
            "4",
            "Wool Blend Coat",
            "Elegant wool blend coat in camel color. Perfect for fall and winter. Classic tailored fit.",
            Category::Outerwear,
            "Coat",
            "L",
            Condition::Good,
            &["wool", "coat", "winter", "elegant"],
            vec![photo(1036622)],
            ("5", "Maria Santos"),
            120,
            date(2024, 1, 15),
            "Chicago, IL",
        ),
        item(
            "5",
            "High-Waisted Jeans",
            "Dark wash high-waisted jeans with great stretch. Flattering fit for all body types.",
            Category::Bottoms,
            "Jeans",
            "29",
            Condition::Good,
            &["jeans", "high-waisted", "dark-wash", "stretch"],
            vec![photo(1598505)],
            ("6", "Jessica Kim"),
            65,
            date(2024, 1, 25),
            "Austin, TX",
        ),
        item(
            "6",
            "Silk Scarf Collection",
            "Set of 3 beautiful silk scarves in various patterns. Perfect for adding elegance to any outfit.",
            Category::Accessories,
            "Scarf",
            "One Size",
            Condition::Excellent,
            &["silk", "scarf", "accessories", "elegant"],
            vec![photo(1183266)],
            ("7", "Rachel Green"),
            45,
            date(2024, 1, 23),
            "Miami, FL",
        ),
    ]
}

/// Returns the demo catalog.
pub fn sample_catalog() -> ItemCatalog {
    // Demo IDs are unique and every item carries an image.
    ItemCatalog::from_items(sample_items()).unwrap_or_default()
}

/// Returns the demo signed-in user.
pub fn sample_user() -> User {
    User {
        id: "1".to_string(),
        email: "demo@rewear.example".to_string(),
        name: "Current User".to_string(),
        points: 150,
        avatar: None,
        location: Some("San Francisco, CA".to_string()),
        join_date: date(2023, 12, 1),
        swap_count: 4,
    }
}

/// Returns the demo swap requests.
pub fn sample_requests() -> Vec<SwapRequest> {
    vec![
        SwapRequest {
            id: "1".to_string(),
            requester_id: "1".to_string(),
            requester_name: "Current User".to_string(),
            item_id: "2".to_string(),
            item_title: "Floral Summer Dress".to_string(),
            offer: SwapOffer::Item {
                item_id: "7".to_string(),
                item_title: "Blue Sweater".to_string(),
            },
            status: SwapStatus::Pending,
            message: Some(
                "Hi! I love this dress and would like to swap it for my blue sweater.".to_string(),
            ),
            created_date: date(2024, 1, 26),
        },
        SwapRequest {
            id: "2".to_string(),
            requester_id: "3".to_string(),
            requester_name: "Emma Rodriguez".to_string(),
            item_id: "1".to_string(),
            item_title: "Vintage Denim Jacket".to_string(),
            offer: SwapOffer::Points { amount: 75 },
            status: SwapStatus::Accepted,
            message: Some("Would love to get this jacket using my points!".to_string()),
            created_date: date(2024, 1, 24),
        },
    ]
}
