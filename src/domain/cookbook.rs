//! The cookbook registry: every named entry known to the service.

use std::collections::HashMap;

use crate::domain::entities::{CookbookEntry, EntryDraft, EntryKind, Ingredient, Recipe};
use crate::domain::error::CookbookError;
use crate::domain::validation::{
    validate_cook_time, validate_entry_type, validate_required_items,
};

/// Mapping from entry name to entry.
///
/// Names are unique across both entry kinds and compared exactly. Entries
/// are immutable once stored and are never removed. Required items may
/// reference names that are not registered yet; they are only checked when a
/// recipe is resolved (see [`crate::domain::aggregation::resolve`]).
#[derive(Debug, Default)]
pub struct Cookbook {
    entries: HashMap<String, CookbookEntry>,
}

impl Cookbook {
    /// Creates an empty cookbook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a draft and stores it as a new entry.
    ///
    /// Checks run in this order: entry type, name, uniqueness, payload.
    /// The cookbook is unchanged when any check fails.
    ///
    /// # Errors
    ///
    /// - [`CookbookError::InvalidType`] if the type is neither `recipe` nor `ingredient`
    /// - [`CookbookError::InvalidName`] if the name is empty
    /// - [`CookbookError::DuplicateEntry`] if the name is already taken
    /// - [`CookbookError::InvalidCookTime`] for an ingredient with a bad cook time
    /// - [`CookbookError::InvalidRequiredItems`] for a recipe with bad items
    pub fn create(&mut self, draft: &EntryDraft) -> Result<&CookbookEntry, CookbookError> {
        let kind = validate_entry_type(draft.entry_type.as_ref())?;

        if draft.name.is_empty() {
            return Err(CookbookError::InvalidName);
        }

        if self.entries.contains_key(&draft.name) {
            return Err(CookbookError::DuplicateEntry(draft.name.clone()));
        }

        let entry = match kind {
            EntryKind::Ingredient => CookbookEntry::Ingredient(Ingredient {
                name: draft.name.clone(),
                cook_time: validate_cook_time(draft.cook_time.as_ref())?,
            }),
            EntryKind::Recipe => CookbookEntry::Recipe(Recipe {
                name: draft.name.clone(),
                required_items: validate_required_items(draft.required_items.as_deref())?,
            }),
        };

        Ok(self.entries.entry(draft.name.clone()).or_insert(entry))
    }

    /// Returns the entry registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&CookbookEntry> {
        self.entries.get(name)
    }

    /// Looks up an entry by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`CookbookError::EntryNotFound`] if no entry has that name.
    pub fn lookup(&self, name: &str) -> Result<&CookbookEntry, CookbookError> {
        self.get(name)
            .ok_or_else(|| CookbookError::EntryNotFound(name.to_string()))
    }

    /// Returns all entries ordered by name.
    pub fn list(&self) -> Vec<&CookbookEntry> {
        let mut entries: Vec<_> = self.entries.values().collect();
        entries.sort_by(|a, b| a.name().cmp(b.name()));
        entries
    }

    /// Returns all recipes ordered by name.
    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.list().into_iter().filter_map(|entry| match entry {
            CookbookEntry::Recipe(recipe) => Some(recipe),
            CookbookEntry::Ingredient(_) => None,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
