//! Result of expanding a recipe into its leaf ingredients.

/// One leaf occurrence in a recipe's shopping list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientLine {
    pub name: String,
    pub quantity: u64,
}

/// A fully expanded recipe.
///
/// `ingredients` is in depth-first traversal order. The same ingredient
/// reached through different branches appears once per branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSummary {
    pub name: String,
    pub cook_time: u64,
    pub ingredients: Vec<IngredientLine>,
}

impl RecipeSummary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cook_time: 0,
            ingredients: Vec::new(),
        }
    }
}
