//! Failure kinds raised by the cookbook domain.

/// Errors produced by name normalization, registry mutations and recipe resolution.
///
/// Every variant is recoverable by the caller; none of them leaves the
/// registry partially modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CookbookError {
    #[error("Invalid name")]
    InvalidName,

    #[error("Invalid type '{0}' - must be recipe or ingredient")]
    InvalidType(String),

    #[error("Entry '{0}' already exists in cookbook")]
    DuplicateEntry(String),

    #[error("Invalid cook time")]
    InvalidCookTime,

    #[error("Invalid required items: {0}")]
    InvalidRequiredItems(String),

    #[error("Entry '{0}' not found")]
    EntryNotFound(String),

    #[error("Recipe '{0}' not found or invalid")]
    RecipeNotFoundOrInvalid(String),

    #[error("Ingredient or recipe '{0}' not found in cookbook")]
    MissingReferencedEntry(String),

    #[error("Cyclic reference: {}", .0.join(" -> "))]
    CyclicReference(Vec<String>),

    #[error("Quantity overflow while expanding '{0}'")]
    QuantityOverflow(String),
}

impl CookbookError {
    /// Stable machine-readable identifier of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidName => "invalid_name",
            Self::InvalidType(_) => "invalid_type",
            Self::DuplicateEntry(_) => "duplicate_entry",
            Self::InvalidCookTime => "invalid_cook_time",
            Self::InvalidRequiredItems(_) => "invalid_required_items",
            Self::EntryNotFound(_) => "entry_not_found",
            Self::RecipeNotFoundOrInvalid(_) => "recipe_not_found_or_invalid",
            Self::MissingReferencedEntry(_) => "missing_referenced_entry",
            Self::CyclicReference(_) => "cyclic_reference",
            Self::QuantityOverflow(_) => "quantity_overflow",
        }
    }
}
