//! Cookbook entries: ingredients and recipes.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::CookbookError;

/// Discriminator accepted by the creation operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Ingredient,
    Recipe,
}

impl FromStr for EntryKind {
    type Err = CookbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ingredient" => Ok(Self::Ingredient),
            "recipe" => Ok(Self::Recipe),
            other => Err(CookbookError::InvalidType(other.to_string())),
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ingredient => f.write_str("ingredient"),
            Self::Recipe => f.write_str("recipe"),
        }
    }
}

/// A leaf entry with a cook time per single unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub cook_time: u64,
}

/// A reference from a recipe to another entry by name.
///
/// The referenced entry is not required to exist when the recipe is stored;
/// it is looked up only when the recipe is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredItem {
    pub name: String,
    pub quantity: u64,
}

/// A composite entry listing the items it needs, in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub name: String,
    pub required_items: Vec<RequiredItem>,
}

/// A uniquely named entry stored in the cookbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CookbookEntry {
    Ingredient(Ingredient),
    Recipe(Recipe),
}

impl CookbookEntry {
    pub fn name(&self) -> &str {
        match self {
            Self::Ingredient(ingredient) => &ingredient.name,
            Self::Recipe(recipe) => &recipe.name,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Ingredient(_) => EntryKind::Ingredient,
            Self::Recipe(_) => EntryKind::Recipe,
        }
    }
}
