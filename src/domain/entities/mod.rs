//! Core domain entities representing the cookbook data model.
//!
//! # Entity Types
//!
//! - [`CookbookEntry`] - Either an [`Ingredient`] or a [`Recipe`]
//! - [`RecipeSummary`] - A recipe expanded into leaf ingredients
//!
//! # Design Pattern
//!
//! Stored entities are always valid. Client input arrives as an [`EntryDraft`]
//! and only becomes a [`CookbookEntry`] after passing validation in
//! [`crate::domain::cookbook::Cookbook::create`].

pub mod draft;
pub mod entry;
pub mod summary;

pub use draft::{EntryDraft, RequiredItemDraft};
pub use entry::{CookbookEntry, EntryKind, Ingredient, Recipe, RequiredItem};
pub use summary::{IngredientLine, RecipeSummary};
