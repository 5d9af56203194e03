// Rust guideline compliant 2026-02-06

//! Hash-based ID generation for items and swap requests.

use sha2::{Digest, Sha256};

/// Prefix for generated item IDs.
pub const ITEM_PREFIX: &str = "itm";

/// Prefix for generated swap request IDs.
pub const SWAP_PREFIX: &str = "swp";

/// Generates a short hash ID (format: `<prefix>-XXXXXX`).
///
/// # Arguments
///
/// * `prefix` - ID prefix, e.g. [`ITEM_PREFIX`]
/// * `parts` - Seed values hashed in order
/// * `nonce` - Disambiguates otherwise identical seeds
///
/// # Returns
///
/// The generated ID.
pub fn generate_id(prefix: &str, parts: &[&str], nonce: u32) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part.as_bytes());
        hasher.update([0u8]);
    }
    hasher.update(nonce.to_le_bytes());

    let hash = hasher.finalize();
    let hex = format!("{:x}", hash);
    format!("{}-{}", prefix, &hex[..6])
}

/// Generates an ID that `is_taken` rejects for no earlier nonce.
///
/// # Arguments
///
/// * `prefix` - ID prefix
/// * `parts` - Seed values hashed in order
/// * `is_taken` - Returns true if an ID is already in use
///
/// # Returns
///
/// The first free ID.
pub fn generate_unique_id<F>(prefix: &str, parts: &[&str], is_taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut nonce = 0u32;
    loop {
        let id = generate_id(prefix, parts, nonce);
        if !is_taken(&id) {
            return id;
        }
        nonce = nonce.wrapping_add(1);
    }
}
