//! Handlers for cookbook entry endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::entry::{CreateEntryRequest, EntryItem, EntryListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers an ingredient or a recipe.
///
/// # Endpoint
///
/// `POST /entry`
///
/// # Request Body
///
/// ```json
/// {
///   "type": "recipe",
///   "name": "Skibidi",
///   "requiredItems": [{ "name": "Bruh", "quantity": 1 }]
/// }
/// ```
///
/// ```json
/// { "type": "ingredient", "name": "Egg", "cookTime": 6 }
/// ```
///
/// # Errors
///
/// Returns 400 with `details.kind` set to `invalid_type`, `invalid_name`,
/// `duplicate_entry`, `invalid_cook_time` or `invalid_required_items`.
pub async fn create_entry_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateEntryRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;

    state.cookbook_service.create_entry(payload.into()).await?;

    Ok(StatusCode::OK)
}

/// Looks up a single entry by exact name.
///
/// # Endpoint
///
/// `GET /entries/{name}`
///
/// # Errors
///
/// Returns 404 if no entry has that name.
pub async fn get_entry_handler(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<EntryItem>, AppError> {
    let entry = state.cookbook_service.get_entry(&name).await?;
    Ok(Json(entry.into()))
}

/// Lists every registered entry ordered by name.
///
/// # Endpoint
///
/// `GET /entries`
pub async fn entry_list_handler(State(state): State<AppState>) -> Json<EntryListResponse> {
    let entries = state.cookbook_service.list_entries().await;

    Json(EntryListResponse {
        items: entries.into_iter().map(Into::into).collect(),
    })
}
