//! Payload validation for entry creation.
//!
//! Turns raw JSON values from an [`EntryDraft`](crate::domain::entities::EntryDraft)
//! into typed fields. Cook times and quantities must fit in a `u64`; larger
//! integers are rejected like negative ones.

use std::collections::HashSet;

use serde_json::Value;

use crate::domain::entities::{EntryKind, RequiredItem, RequiredItemDraft};
use crate::domain::error::CookbookError;

/// Parses the entry type.
///
/// # Errors
///
/// Returns [`CookbookError::InvalidType`] if the type is missing, not a
/// string, or neither `recipe` nor `ingredient`.
pub fn validate_entry_type(entry_type: Option<&Value>) -> Result<EntryKind, CookbookError> {
    match entry_type {
        Some(Value::String(kind)) => kind.parse(),
        Some(other) => Err(CookbookError::InvalidType(other.to_string())),
        None => Err(CookbookError::InvalidType(String::new())),
    }
}

/// Validates an ingredient cook time.
///
/// # Errors
///
/// Returns [`CookbookError::InvalidCookTime`] if the value is missing, not an
/// integer, negative, or above `u64::MAX`.
pub fn validate_cook_time(cook_time: Option<&Value>) -> Result<u64, CookbookError> {
    cook_time
        .and_then(Value::as_u64)
        .ok_or(CookbookError::InvalidCookTime)
}

/// Validates a recipe's required items, preserving their order.
///
/// A missing list is treated as empty.
///
/// # Errors
///
/// Returns [`CookbookError::InvalidRequiredItems`] if an item has no string name,
/// a quantity that is not a positive integer, or repeats an earlier name.
pub fn validate_required_items(
    items: Option<&[RequiredItemDraft]>,
) -> Result<Vec<RequiredItem>, CookbookError> {
    let items = items.unwrap_or_default();
    let mut seen = HashSet::with_capacity(items.len());
    let mut validated = Vec::with_capacity(items.len());

    for item in items {
        let quantity = item
            .quantity
            .as_u64()
            .filter(|quantity| *quantity > 0)
            .ok_or_else(|| {
                CookbookError::InvalidRequiredItems(
                    "quantity must be a positive integer".to_string(),
                )
            })?;

        let name = item.name.as_str().ok_or_else(|| {
            CookbookError::InvalidRequiredItems("every item needs a name".to_string())
        })?;

        if !seen.insert(name) {
            return Err(CookbookError::InvalidRequiredItems(format!(
                "'{name}' is listed more than once"
            )));
        }

        validated.push(RequiredItem {
            name: name.to_string(),
            quantity,
        });
    }

    Ok(validated)
}
