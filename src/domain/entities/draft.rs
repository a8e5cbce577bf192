//! Unvalidated entry input, as received from clients or a seed file.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Raw input of the creation operation.
///
/// The type and numeric fields are kept as JSON values so that wrongly typed,
/// negative or missing values are reported with the proper failure kind
/// instead of a generic deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDraft {
    #[serde(rename = "type", default)]
    pub entry_type: Option<Value>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub cook_time: Option<Value>,

    #[serde(default)]
    pub required_items: Option<Vec<RequiredItemDraft>>,
}

/// Raw required item descriptor inside a recipe draft.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequiredItemDraft {
    #[serde(default)]
    pub name: Value,

    #[serde(default)]
    pub quantity: Value,
}

impl EntryDraft {
    /// Builds an ingredient draft.
    pub fn ingredient(name: impl Into<String>, cook_time: u64) -> Self {
        Self {
            entry_type: Some(json!("ingredient")),
            name: name.into(),
            cook_time: Some(json!(cook_time)),
            required_items: None,
        }
    }

    /// Builds a recipe draft from `(name, quantity)` pairs.
    pub fn recipe(name: impl Into<String>, items: &[(&str, u64)]) -> Self {
        Self {
            entry_type: Some(json!("recipe")),
            name: name.into(),
            cook_time: None,
            required_items: Some(
                items
                    .iter()
                    .map(|(item, quantity)| RequiredItemDraft {
                        name: json!(item),
                        quantity: json!(quantity),
                    })
                    .collect(),
            ),
        }
    }
}
