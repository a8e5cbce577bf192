//! Recipe expansion into leaf ingredients and total cook time.
//!
//! # Algorithm
//!
//! Depth-first, left-to-right walk over the reference graph, driven by an
//! explicit stack instead of recursion. Each stack frame remembers the recipe
//! being expanded, the quantity multiplier accumulated on the path to it, and
//! the index of the next required item to visit.
//!
//! - An ingredient reached with multiplier `q` appends `{name, q}` to the
//!   output and adds `cook_time * q` to the total. Repeated leaves are never
//!   merged.
//! - A recipe reached with multiplier `q` pushes a new frame; its items are
//!   visited with `q * item.quantity`.
//! - The set of recipe names currently on the stack detects cycles: meeting
//!   one of them again fails with [`CookbookError::CyclicReference`]. The same
//!   recipe reached through two separate branches (a diamond) is not a cycle.
//!
//! Resolution is all-or-nothing: the first missing reference, cycle or
//! overflow aborts the walk and no partial summary is returned.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::cookbook::Cookbook;
use crate::domain::entities::{CookbookEntry, IngredientLine, Recipe, RecipeSummary};
use crate::domain::error::CookbookError;

struct Frame<'a> {
    recipe: &'a Recipe,
    multiplier: u64,
    next: usize,
}

/// Expands `recipe_name` into its shopping list and total cook time.
///
/// # Errors
///
/// - [`CookbookError::RecipeNotFoundOrInvalid`] if the name is unknown or names an ingredient
/// - [`CookbookError::MissingReferencedEntry`] if any reachable item is not registered
/// - [`CookbookError::CyclicReference`] if a recipe is reachable from itself
/// - [`CookbookError::QuantityOverflow`] if a quantity or the total cook time exceeds `u64`
pub fn resolve(cookbook: &Cookbook, recipe_name: &str) -> Result<RecipeSummary, CookbookError> {
    let root = match cookbook.get(recipe_name) {
        Some(CookbookEntry::Recipe(recipe)) => recipe,
        Some(CookbookEntry::Ingredient(_)) | None => {
            return Err(CookbookError::RecipeNotFoundOrInvalid(
                recipe_name.to_string(),
            ));
        }
    };

    let mut summary = RecipeSummary::new(&root.name);
    let mut on_path: HashSet<&str> = HashSet::from([root.name.as_str()]);
    let mut stack = vec![Frame {
        recipe: root,
        multiplier: 1,
        next: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let recipe = frame.recipe;
        let multiplier = frame.multiplier;

        let Some(item) = recipe.required_items.get(frame.next) else {
            on_path.remove(recipe.name.as_str());
            stack.pop();
            continue;
        };
        frame.next += 1;

        let quantity = multiplier
            .checked_mul(item.quantity)
            .ok_or_else(|| CookbookError::QuantityOverflow(item.name.clone()))?;

        match cookbook.get(&item.name) {
            None => {
                debug!(recipe = %recipe.name, missing = %item.name, "Missing referenced entry");
                return Err(CookbookError::MissingReferencedEntry(item.name.clone()));
            }
            Some(CookbookEntry::Ingredient(ingredient)) => {
                summary.cook_time = ingredient
                    .cook_time
                    .checked_mul(quantity)
                    .and_then(|time| summary.cook_time.checked_add(time))
                    .ok_or_else(|| CookbookError::QuantityOverflow(ingredient.name.clone()))?;
                summary.ingredients.push(IngredientLine {
                    name: ingredient.name.clone(),
                    quantity,
                });
            }
            Some(CookbookEntry::Recipe(child)) => {
                if !on_path.insert(child.name.as_str()) {
                    let mut path: Vec<String> =
                        stack.iter().map(|f| f.recipe.name.clone()).collect();
                    path.push(child.name.clone());
                    return Err(CookbookError::CyclicReference(path));
                }
                stack.push(Frame {
                    recipe: child,
                    multiplier: quantity,
                    next: 0,
                });
            }
        }
    }

    debug!(
        recipe = %summary.name,
        cook_time = summary.cook_time,
        lines = summary.ingredients.len(),
        "Recipe resolved"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::EntryDraft;

    fn cookbook(drafts: &[EntryDraft]) -> Cookbook {
        let mut cookbook = Cookbook::new();
        for draft in drafts {
            cookbook.create(draft).unwrap();
        }
        cookbook
    }

    fn line(name: &str, quantity: u64) -> IngredientLine {
        IngredientLine {
            name: name.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_resolve_empty_recipe() {
        let book = cookbook(&[EntryDraft::recipe("Air", &[])]);

        let summary = resolve(&book, "Air").unwrap();

        assert_eq!(summary.name, "Air");
        assert_eq!(summary.cook_time, 0);
        assert!(summary.ingredients.is_empty());
    }

    #[test]
    fn test_resolve_chain_multiplies_quantities() {
        let book = cookbook(&[
            EntryDraft::recipe("A", &[("B", 2)]),
            EntryDraft::recipe("B", &[("C", 3)]),
            EntryDraft::ingredient("C", 5),
        ]);

        let summary = resolve(&book, "A").unwrap();

        assert_eq!(summary.ingredients, vec![line("C", 6)]);
        assert_eq!(summary.cook_time, 30);
    }

    #[test]
    fn test_resolve_skibidi_spaghetti() {
        let book = cookbook(&[
            EntryDraft::recipe(
                "Skibidi Spaghetti",
                &[("Meatball", 3), ("Pasta", 1), ("Tomato", 2)],
            ),
            EntryDraft::recipe("Meatball", &[("Beef", 2), ("Egg", 1)]),
            EntryDraft::recipe("Pasta", &[("Flour", 3), ("Egg", 1)]),
            EntryDraft::ingredient("Beef", 5),
            EntryDraft::ingredient("Egg", 3),
            EntryDraft::ingredient("Flour", 0),
            EntryDraft::ingredient("Tomato", 2),
        ]);

        let summary = resolve(&book, "Skibidi Spaghetti").unwrap();

        assert_eq!(
            summary.ingredients,
            vec![
                line("Beef", 6),
                line("Egg", 3),
                line("Flour", 3),
                line("Egg", 1),
                line("Tomato", 2),
            ]
        );
        assert_eq!(summary.cook_time, 6 * 5 + 3 * 3 + 3 * 0 + 3 + 2 * 2);
    }

    #[test]
    fn test_resolve_diamond_appends_each_branch() {
        let book = cookbook(&[
            EntryDraft::recipe("Feast", &[("Left", 2), ("Right", 5)]),
            EntryDraft::recipe("Left", &[("Base", 1)]),
            EntryDraft::recipe("Right", &[("Base", 1)]),
            EntryDraft::recipe("Base", &[("Salt", 3)]),
            EntryDraft::ingredient("Salt", 1),
        ]);

        let summary = resolve(&book, "Feast").unwrap();

        assert_eq!(summary.ingredients, vec![line("Salt", 6), line("Salt", 15)]);
        assert_eq!(summary.cook_time, 21);
    }

    #[test]
    fn test_resolve_unknown_name() {
        let book = Cookbook::new();

        assert_eq!(
            resolve(&book, "Ghost"),
            Err(CookbookError::RecipeNotFoundOrInvalid("Ghost".to_string()))
        );
    }

    #[test]
    fn test_resolve_ingredient_directly_is_rejected() {
        let book = cookbook(&[EntryDraft::ingredient("Egg", 3)]);

        assert_eq!(
            resolve(&book, "Egg"),
            Err(CookbookError::RecipeNotFoundOrInvalid("Egg".to_string()))
        );
    }

    #[test]
    fn test_resolve_missing_top_level_reference() {
        let book = cookbook(&[
            EntryDraft::recipe("Toast", &[("Bread", 1), ("Butter", 1)]),
            EntryDraft::ingredient("Bread", 2),
        ]);

        assert_eq!(
            resolve(&book, "Toast"),
            Err(CookbookError::MissingReferencedEntry("Butter".to_string()))
        );
    }

    #[test]
    fn test_resolve_missing_nested_reference_reported_first() {
        let book = cookbook(&[
            EntryDraft::recipe("Dinner", &[("Soup", 1), ("Wine", 1)]),
            EntryDraft::recipe("Soup", &[("Stock", 1)]),
        ]);

        assert_eq!(
            resolve(&book, "Dinner"),
            Err(CookbookError::MissingReferencedEntry("Stock".to_string()))
        );
    }

    #[test]
    fn test_resolve_self_reference() {
        let book = cookbook(&[EntryDraft::recipe("Ouroboros", &[("Ouroboros", 1)])]);

        assert_eq!(
            resolve(&book, "Ouroboros"),
            Err(CookbookError::CyclicReference(vec![
                "Ouroboros".to_string(),
                "Ouroboros".to_string()
            ]))
        );
    }

    #[test]
    fn test_resolve_indirect_cycle_reports_path() {
        let book = cookbook(&[
            EntryDraft::recipe("A", &[("Egg", 1), ("B", 1)]),
            EntryDraft::recipe("B", &[("C", 2)]),
            EntryDraft::recipe("C", &[("A", 1)]),
            EntryDraft::ingredient("Egg", 1),
        ]);

        assert_eq!(
            resolve(&book, "A"),
            Err(CookbookError::CyclicReference(vec![
                "A".to_string(),
                "B".to_string(),
                "C".to_string(),
                "A".to_string(),
            ]))
        );
    }

    #[test]
    fn test_resolve_cycle_not_reachable_is_ignored() {
        let book = cookbook(&[
            EntryDraft::recipe("Fine", &[("Egg", 1)]),
            EntryDraft::recipe("Loop", &[("Loop", 1)]),
            EntryDraft::ingredient("Egg", 4),
        ]);

        let summary = resolve(&book, "Fine").unwrap();
        assert_eq!(summary.cook_time, 4);
    }

    #[test]
    fn test_resolve_quantity_overflow() {
        let book = cookbook(&[
            EntryDraft::recipe("Big", &[("Bigger", u64::MAX)]),
            EntryDraft::recipe("Bigger", &[("Grain", 2)]),
            EntryDraft::ingredient("Grain", 0),
        ]);

        assert_eq!(
            resolve(&book, "Big"),
            Err(CookbookError::QuantityOverflow("Grain".to_string()))
        );
    }

    #[test]
    fn test_resolve_cook_time_overflow() {
        let book = cookbook(&[
            EntryDraft::recipe("Slow", &[("Age", 2)]),
            EntryDraft::ingredient("Age", u64::MAX),
        ]);

        assert_eq!(
            resolve(&book, "Slow"),
            Err(CookbookError::QuantityOverflow("Age".to_string()))
        );
    }
}
