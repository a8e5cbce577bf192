//! DTOs for the recipe summary endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{IngredientLine, RecipeSummary};

/// Query string of `GET /summary`.
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    #[serde(default)]
    pub name: String,
}

/// One leaf ingredient occurrence with its multiplied quantity.
#[derive(Debug, Serialize)]
pub struct IngredientQuantity {
    pub name: String,
    pub quantity: u64,
}

/// A recipe expanded into leaf ingredients.
///
/// ```json
/// {
///   "name": "Skibidi Spaghetti",
///   "cookTime": 46,
///   "ingredients": [{ "name": "Beef", "quantity": 6 }]
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub name: String,
    pub cook_time: u64,
    pub ingredients: Vec<IngredientQuantity>,
}

impl From<IngredientLine> for IngredientQuantity {
    fn from(line: IngredientLine) -> Self {
        Self {
            name: line.name,
            quantity: line.quantity,
        }
    }
}

impl From<RecipeSummary> for SummaryResponse {
    fn from(summary: RecipeSummary) -> Self {
        Self {
            name: summary.name,
            cook_time: summary.cook_time,
            ingredients: summary.ingredients.into_iter().map(Into::into).collect(),
        }
    }
}
