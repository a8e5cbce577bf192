//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`seed`] - Loading cookbook entries from a JSON file at startup

pub mod seed;
