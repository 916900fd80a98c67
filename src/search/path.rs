use crate::compiler::CompiledRecipe;
use crate::inventory::Inventory;
use ahash::AHashMap;

/// How a state was first discovered.
#[derive(Debug, Clone)]
pub(crate) struct ParentLink {
    pub(crate) predecessor: Option<Inventory>,
    /// Index of the recipe that produced the state.
    pub(crate) recipe: Option<usize>,
    pub(crate) cost: f64,
}

impl ParentLink {
    pub(crate) fn root() -> Self {
        Self {
            predecessor: None,
            recipe: None,
            cost: 0.0,
        }
    }
}

pub(crate) type ParentMap = AHashMap<Inventory, ParentLink>;

/// One state of a plan and the action that led to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanStep {
    pub state: Inventory,
    /// `None` for the starting state.
    pub action: Option<String>,
}

/// Walks predecessor links from `goal` back to the start.
///
/// Returns the steps in start-to-goal order together with the cumulative
/// cost recorded for `goal`.
pub(crate) fn reconstruct(
    parents: &ParentMap,
    recipes: &[CompiledRecipe],
    goal: Inventory,
) -> (Vec<PlanStep>, f64) {
    let total_cost = parents.get(&goal).map_or(0.0, |link| link.cost);
    let mut steps = Vec::new();
    let mut current = Some(goal);

    while let Some(state) = current {
        let link = parents.get(&state);
        let action = link
            .and_then(|l| l.recipe)
            .and_then(|index| recipes.get(index))
            .map(|recipe| recipe.name().to_string());
        current = link.and_then(|l| l.predecessor.clone());
        steps.push(PlanStep { state, action });
    }

    steps.reverse();
    (steps, total_cost)
}
