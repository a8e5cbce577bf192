//! Handler for the recipe summary endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::summary::{SummaryQuery, SummaryResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Expands a recipe into its shopping list and total cook time.
///
/// # Endpoint
///
/// `GET /summary?name={recipe}`
///
/// # Response
///
/// ```json
/// {
///   "name": "Skibidi Spaghetti",
///   "cookTime": 46,
///   "ingredients": [
///     { "name": "Beef", "quantity": 6 },
///     { "name": "Egg", "quantity": 3 }
///   ]
/// }
/// ```
///
/// Leaves reached through different branches are listed separately.
///
/// # Errors
///
/// Returns 400 with `details.kind` set to `recipe_not_found_or_invalid`,
/// `missing_referenced_entry`, `cyclic_reference` or `quantity_overflow`.
pub async fn summary_handler(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<SummaryResponse>, AppError> {
    let summary = state.cookbook_service.summarize(&query.name).await?;
    Ok(Json(summary.into()))
}
