//! Handler for recipe name normalization.

use axum::Json;

use crate::api::dto::parse::{ParseRequest, ParseResponse};
use crate::error::AppError;
use crate::utils::name_normalizer::normalize_name;

/// Normalizes a handwritten recipe name.
///
/// # Endpoint
///
/// `POST /parse`
///
/// # Request Body
///
/// ```json
/// { "input": "Riz@z RISO00tto!" }
/// ```
///
/// # Response
///
/// ```json
/// { "msg": "Rizz Risotto" }
/// ```
///
/// # Errors
///
/// Returns 400 if nothing remains after normalization.
pub async fn parse_handler(
    Json(payload): Json<ParseRequest>,
) -> Result<Json<ParseResponse>, AppError> {
    let msg = normalize_name(&payload.input)?;
    Ok(Json(ParseResponse { msg }))
}
