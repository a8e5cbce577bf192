//! Cookbook registry service.

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::domain::Cookbook;
use crate::domain::aggregation::resolve;
use crate::domain::entities::{CookbookEntry, EntryDraft, RecipeSummary};
use crate::error::AppError;

/// Service owning the process-wide cookbook.
///
/// The cookbook sits behind a single read/write lock. Each operation holds
/// the lock for its whole duration, so a creation never interleaves with a
/// resolution and every call observes one consistent snapshot.
pub struct CookbookService {
    cookbook: RwLock<Cookbook>,
}

impl CookbookService {
    /// Creates a service around an existing (possibly pre-seeded) cookbook.
    pub fn new(cookbook: Cookbook) -> Self {
        Self {
            cookbook: RwLock::new(cookbook),
        }
    }

    /// Validates and stores a new entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an invalid type, name, cook time or
    /// required item list, and for a name that is already registered.
    pub async fn create_entry(&self, draft: EntryDraft) -> Result<CookbookEntry, AppError> {
        let mut cookbook = self.cookbook.write().await;

        match cookbook.create(&draft) {
            Ok(entry) => {
                info!(name = %entry.name(), kind = %entry.kind(), "Entry created");
                Ok(entry.clone())
            }
            Err(e) => {
                warn!(name = %draft.name, error = %e, "Entry rejected");
                Err(e.into())
            }
        }
    }

    /// Retrieves an entry by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the entry does not exist.
    pub async fn get_entry(&self, name: &str) -> Result<CookbookEntry, AppError> {
        let cookbook = self.cookbook.read().await;
        Ok(cookbook.lookup(name)?.clone())
    }

    /// Lists all entries ordered by name.
    pub async fn list_entries(&self) -> Vec<CookbookEntry> {
        let cookbook = self.cookbook.read().await;
        cookbook.list().into_iter().cloned().collect()
    }

    /// Expands a recipe into its shopping list and total cook time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the recipe is unknown, names an
    /// ingredient, references a missing entry, contains a cycle or overflows.
    pub async fn summarize(&self, recipe_name: &str) -> Result<RecipeSummary, AppError> {
        let cookbook = self.cookbook.read().await;

        resolve(&cookbook, recipe_name).map_err(|e| {
            warn!(recipe = %recipe_name, error = %e, "Summary failed");
            e.into()
        })
    }

    /// Number of registered entries.
    pub async fn entry_count(&self) -> usize {
        self.cookbook.read().await.len()
    }
}
