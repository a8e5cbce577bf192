//! API route configuration.

use crate::api::handlers::{
    create_entry_handler, entry_list_handler, get_entry_handler, parse_handler, summary_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Cookbook routes.
///
/// # Endpoints
///
/// - `POST /parse`           - Normalize a handwritten recipe name
/// - `POST /entry`           - Register an ingredient or recipe
/// - `GET  /summary`         - Expand a recipe (`?name=...`)
/// - `GET  /entries`         - List all entries
/// - `GET  /entries/{name}`  - Look up a single entry
pub fn cookbook_routes() -> Router<AppState> {
    Router::new()
        .route("/parse", post(parse_handler))
        .route("/entry", post(create_entry_handler))
        .route("/summary", get(summary_handler))
        .route("/entries", get(entry_list_handler))
        .route("/entries/{name}", get(get_entry_handler))
}
