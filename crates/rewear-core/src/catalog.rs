// Rust guideline compliant 2026-02-06

//! Item catalog: the source of truth for browsing queries.
//!
//! Catalog snapshots are exchanged as JSONL, one item per line. Ingestion
//! rejects malformed JSON outright but skips well-formed records that fail
//! item validation, so one bad listing cannot hide the rest of the catalog.

use crate::{Error, Item, Result};
use std::collections::HashSet;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Ordered collection of listed items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemCatalog {
    items: Vec<Item>,
}

impl ItemCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from items, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns an error if an item fails validation or repeats an ID.
    pub fn from_items(items: Vec<Item>) -> Result<Self> {
        let mut catalog = Self::new();
        for item in items {
            catalog.insert(item)?;
        }
        Ok(catalog)
    }

    /// Reads a catalog from JSONL.
    ///
    /// Blank lines are ignored. Records failing validation, including
    /// duplicates of an earlier ID, are skipped with a warning.
    ///
    /// # Arguments
    ///
    /// * `reader` - Source of JSONL text
    ///
    /// # Returns
    ///
    /// The catalog in file order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The reader fails
    /// - A non-blank line is not a JSON item
    pub fn from_jsonl<R: BufRead>(reader: R) -> Result<Self> {
        let mut catalog = Self::new();
        let mut seen = HashSet::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let item: Item = serde_json::from_str(&line).map_err(|source| Error::Malformed {
                line: index + 1,
                source,
            })?;

            if let Err(err) = item.validate() {
                tracing::warn!(line = index + 1, error = %err, "skipping invalid catalog item");
                continue;
            }

            if !seen.insert(item.id.clone()) {
                tracing::warn!(line = index + 1, id = %item.id, "skipping duplicate catalog item");
                continue;
            }

            catalog.items.push(item);
        }

        tracing::debug!(items = catalog.items.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Loads a catalog from a JSONL file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_jsonl(BufReader::new(file))
    }

    /// Writes the catalog as JSONL.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_jsonl<W: Write>(&self, mut writer: W) -> Result<()> {
        for item in &self.items {
            serde_json::to_writer(&mut writer, item)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Returns every item in insertion order, unfiltered.
    pub fn all(&self) -> &[Item] {
        &self.items
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an item by ID.
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns true if an item with this ID exists.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Appends an item.
    ///
    /// # Errors
    ///
    /// Returns an error if the item fails validation or its ID is taken.
    pub fn insert(&mut self, item: Item) -> Result<()> {
        item.validate()?;
        if self.contains(&item.id) {
            return Err(Error::DuplicateId(item.id));
        }
        self.items.push(item);
        Ok(())
    }

    /// Returns the items listed by a user.
    pub fn uploaded_by(&self, user_id: &str) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.uploader_id == user_id)
            .collect()
    }

    /// Returns the items awaiting moderation.
    pub fn pending_approval(&self) -> Vec<&Item> {
        self.items.iter().filter(|item| !item.is_approved).collect()
    }

    /// Returns the items a moderator has approved.
    pub fn approved(&self) -> Vec<&Item> {
        self.items.iter().filter(|item| item.is_approved).collect()
    }

    /// Marks an item as approved.
    ///
    /// # Errors
    ///
    /// Returns an error if no item has this ID.
    pub fn approve(&mut self, id: &str) -> Result<&Item> {
        let item = self.get_mut(id)?;
        item.is_approved = true;
        Ok(item)
    }

    /// Removes a rejected item and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if no item has this ID.
    pub fn reject(&mut self, id: &str) -> Result<Item> {
        let pos = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        Ok(self.items.remove(pos))
    }

    /// Marks an item as swapped away, hiding it from browsing.
    ///
    /// # Errors
    ///
    /// Returns an error if no item has this ID.
    pub fn mark_swapped(&mut self, id: &str) -> Result<&Item> {
        let item = self.get_mut(id)?;
        item.is_available = false;
        Ok(item)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Item> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }
}
