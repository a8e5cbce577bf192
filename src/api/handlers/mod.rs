//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod entry;
pub mod health;
pub mod parse;
pub mod summary;

pub use entry::{create_entry_handler, entry_list_handler, get_entry_handler};
pub use health::health_handler;
pub use parse::parse_handler;
pub use summary::summary_handler;
