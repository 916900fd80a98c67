use crate::compiler::CompiledRecipe;
use crate::error::TransitionError;
use crate::inventory::Inventory;

/// One edge of the search graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<'r> {
    pub action: &'r str,
    /// Position of the recipe in the recipe set.
    pub recipe_index: usize,
    pub state: Inventory,
    pub cost: f64,
}

/// Lazily yields a successor for every recipe applicable to a state.
pub struct Expansion<'r, 's> {
    recipes: std::iter::Enumerate<std::slice::Iter<'r, CompiledRecipe>>,
    state: &'s Inventory,
}

impl<'r> Iterator for Expansion<'r, '_> {
    type Item = Result<Successor<'r>, TransitionError>;

    fn next(&mut self) -> Option<Self::Item> {
        let state = self.state;
        let (recipe_index, recipe) = self
            .recipes
            .by_ref()
            .find(|(_, recipe)| recipe.is_applicable(state))?;
        Some(recipe.apply(state).map(|next| Successor {
            action: recipe.name(),
            recipe_index,
            state: next,
            cost: recipe.cost(),
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.recipes.size_hint().1)
    }
}

/// The search graph's edge function.
///
/// Walks the whole recipe set in declaration order on every call and yields
/// `(action, successor, cost)` for each recipe whose predicate holds. Nothing
/// is cached. Every successor is a fresh inventory; `state` is never modified.
pub fn expand<'r, 's>(recipes: &'r [CompiledRecipe], state: &'s Inventory) -> Expansion<'r, 's> {
    Expansion {
        recipes: recipes.iter().enumerate(),
        state,
    }
}
