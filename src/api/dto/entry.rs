//! DTOs for entry creation and lookup.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::domain::entities::{CookbookEntry, EntryDraft, RequiredItem, RequiredItemDraft};

/// Request to register an ingredient or a recipe.
///
/// Type, cook time and item checks are performed by the cookbook itself so
/// that each failure is reported with its own kind; this DTO only bounds the
/// request size.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntryRequest {
    #[serde(rename = "type", default)]
    pub entry_type: Option<Value>,

    #[serde(default)]
    #[validate(length(max = 256, message = "Entry name must be at most 256 characters"))]
    pub name: String,

    #[serde(default)]
    pub cook_time: Option<Value>,

    #[serde(default)]
    #[validate(length(max = 1000, message = "A recipe can list at most 1000 items"))]
    pub required_items: Option<Vec<RequiredItemDraft>>,
}

impl From<CreateEntryRequest> for EntryDraft {
    fn from(request: CreateEntryRequest) -> Self {
        Self {
            entry_type: request.entry_type,
            name: request.name,
            cook_time: request.cook_time,
            required_items: request.required_items,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RequiredItemDto {
    pub name: String,
    pub quantity: u64,
}

/// A stored entry, tagged by its type.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EntryItem {
    Ingredient {
        name: String,
        #[serde(rename = "cookTime")]
        cook_time: u64,
    },
    Recipe {
        name: String,
        #[serde(rename = "requiredItems")]
        required_items: Vec<RequiredItemDto>,
    },
}

/// Response containing every registered entry.
#[derive(Debug, Serialize)]
pub struct EntryListResponse {
    pub items: Vec<EntryItem>,
}

impl From<RequiredItem> for RequiredItemDto {
    fn from(item: RequiredItem) -> Self {
        Self {
            name: item.name,
            quantity: item.quantity,
        }
    }
}

impl From<CookbookEntry> for EntryItem {
    fn from(entry: CookbookEntry) -> Self {
        match entry {
            CookbookEntry::Ingredient(ingredient) => EntryItem::Ingredient {
                name: ingredient.name,
                cook_time: ingredient.cook_time,
            },
            CookbookEntry::Recipe(recipe) => EntryItem::Recipe {
                name: recipe.name,
                required_items: recipe.required_items.into_iter().map(Into::into).collect(),
            },
        }
    }
}
