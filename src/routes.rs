//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`   - Health check (not rate limited)
//! - everything in [`crate::api::routes::cookbook_routes`]
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, when configured
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limit` - `(per_second, burst)` applied per client IP to the cookbook
///   routes, or `None` to disable limiting
pub fn app_router(state: AppState, rate_limit: Option<(u64, u32)>) -> NormalizePath<Router> {
    let mut cookbook_router = api::routes::cookbook_routes();

    if let Some((per_second, burst)) = rate_limit
        && let Some(limiter) = rate_limit::layer(per_second, burst)
    {
        cookbook_router = cookbook_router.layer(limiter);
    }

    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(cookbook_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
