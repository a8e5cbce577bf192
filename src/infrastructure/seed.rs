//! Seed file loading.
//!
//! A seed file is a JSON array of create-entry requests, using the same
//! shape as `POST /entry`:
//!
//! ```json
//! [
//!   { "type": "ingredient", "name": "Egg", "cookTime": 6 },
//!   { "type": "recipe", "name": "Omelette", "requiredItems": [{ "name": "Egg", "quantity": 3 }] }
//! ]
//! ```
//!
//! Entries are registered in file order. The file is only ever read.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::domain::Cookbook;
use crate::domain::entities::EntryDraft;

/// Reads and parses the drafts in a seed file without validating them.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of entries.
pub fn read_drafts(path: &Path) -> Result<Vec<EntryDraft>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;

    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse seed file {}", path.display()))
}

/// Builds a cookbook from a seed file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or on the first
/// entry the cookbook rejects.
pub fn load_cookbook(path: &Path) -> Result<Cookbook> {
    let drafts = read_drafts(path)?;
    let mut cookbook = Cookbook::new();

    for (index, draft) in drafts.iter().enumerate() {
        cookbook.create(draft).with_context(|| {
            format!("Seed entry #{index} ('{}') was rejected", draft.name)
        })?;
    }

    info!(entries = cookbook.len(), path = %path.display(), "Seed file loaded");
    Ok(cookbook)
}
