//! # Cookbook Registry
//!
//! An HTTP service where clients register ingredients and recipes, then ask
//! for a recipe's fully expanded shopping list and total cook time.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entries, the registry, and the aggregation engine
//! - **Application Layer** ([`application`]) - Shared cookbook ownership and locking
//! - **Infrastructure Layer** ([`infrastructure`]) - Seed file loading
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Canonical recipe names from handwritten input
//! - Forward references between recipes, checked lazily on summary
//! - Depth-first expansion with multiplied quantities and cycle detection
//! - Per-IP rate limiting and structured request logging
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: entries registered at startup
//! export SEED_FILE="./cookbook.json"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::CookbookService;
    pub use crate::domain::entities::{CookbookEntry, EntryDraft, RecipeSummary};
    pub use crate::domain::{Cookbook, CookbookError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
