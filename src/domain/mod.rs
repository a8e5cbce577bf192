//! Domain layer containing the cookbook model and its algorithms.
//!
//! This module is independent of HTTP and process concerns. Everything here is
//! synchronous and operates on a borrowed [`cookbook::Cookbook`].
//!
//! # Architecture
//!
//! - [`entities`] - Entries, drafts and recipe summaries
//! - [`cookbook`] - The registry of named entries
//! - [`validation`] - Payload checks applied before an entry is stored
//! - [`aggregation`] - Expansion of a recipe into leaf ingredients
//! - [`error`] - Failure kinds shared by all of the above
//!
//! # Resolution Flow
//!
//! 1. Client registers ingredients and recipes through [`cookbook::Cookbook::create`]
//! 2. A summary request calls [`aggregation::resolve`] on the same cookbook
//! 3. Each required item is looked up lazily during the walk

pub mod aggregation;
pub mod cookbook;
pub mod entities;
pub mod error;
pub mod validation;

pub use cookbook::Cookbook;
pub use error::CookbookError;
