//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input limits. Field names follow the camelCase wire format.

pub mod entry;
pub mod health;
pub mod parse;
pub mod summary;
