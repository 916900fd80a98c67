use crate::compiler::CompiledRecipe;
use crate::goal::Goal;
use crate::inventory::Inventory;
use ahash::AHashSet;

/// An estimate of the remaining cost from a state to the goal.
///
/// Estimates must be non-negative. A non-finite estimate marks the state as
/// a dead end: it is recorded as discovered but never pushed to the frontier.
/// With a zero estimate the search is plain Dijkstra; an admissible and
/// consistent estimate turns it into A*.
pub trait Heuristic: Send + Sync {
    fn estimate(&self, state: &Inventory) -> f64;
}

/// The constant zero estimate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _state: &Inventory) -> f64 {
        0.0
    }
}

impl<F> Heuristic for F
where
    F: Fn(&Inventory) -> f64 + Send + Sync,
{
    fn estimate(&self, state: &Inventory) -> f64 {
        self(state)
    }
}

/// Prunes states that hold more durable items than can ever be useful.
///
/// An item is durable when some recipe requires it and no recipe consumes
/// it, like a pickaxe or a bench. Its cap is the largest quantity any
/// recipe requires, the goal names, or the start state already holds.
/// Durable items never go down, so a cap below the starting quantity would
/// prune every successor. Holding more than the cap never enables anything
/// new, so such states are dead ends. Every other state gets a zero
/// estimate, which leaves plan costs unchanged.
#[derive(Debug, Clone)]
pub struct ToolCapHeuristic {
    caps: Vec<(usize, u32)>,
}

impl ToolCapHeuristic {
    pub fn new(recipes: &[CompiledRecipe], goal: &Goal, initial: &Inventory) -> Self {
        let consumed: AHashSet<usize> = recipes
            .iter()
            .flat_map(|r| r.consumes().iter().map(|(id, _)| id.index()))
            .collect();

        let mut caps: Vec<(usize, u32)> = Vec::new();
        for recipe in recipes {
            for &(id, quantity) in recipe.requires() {
                if consumed.contains(&id.index()) {
                    continue;
                }
                match caps.iter_mut().find(|(index, _)| *index == id.index()) {
                    Some((_, cap)) => *cap = (*cap).max(quantity),
                    None => caps.push((id.index(), quantity)),
                }
            }
        }

        for (index, cap) in caps.iter_mut() {
            let target = goal
                .targets()
                .iter()
                .filter(|(id, _)| id.index() == *index)
                .map(|&(_, quantity)| quantity)
                .max()
                .unwrap_or(0);
            let held = initial.quantities().get(*index).copied().unwrap_or(0);
            *cap = (*cap).max(target).max(held);
        }

        caps.sort_unstable();
        Self { caps }
    }

    /// Number of durable items being watched.
    pub fn durable_items(&self) -> usize {
        self.caps.len()
    }
}

impl Heuristic for ToolCapHeuristic {
    fn estimate(&self, state: &Inventory) -> f64 {
        let over_cap = self
            .caps
            .iter()
            .any(|&(index, cap)| state.quantities().get(index).copied().unwrap_or(0) > cap);
        if over_cap { f64::INFINITY } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::ItemId;

    fn id(i: usize) -> ItemId {
        ItemId::new(i)
    }

    // items: 0 = wood, 1 = bench, 2 = plank
    fn recipes() -> Vec<CompiledRecipe> {
        vec![
            CompiledRecipe::new("chop", [], [], [(id(0), 1)], 1.0).unwrap(),
            CompiledRecipe::new("build bench", [], [(id(0), 1)], [(id(1), 1)], 1.0).unwrap(),
            CompiledRecipe::new("saw", [(id(1), 1)], [(id(0), 1)], [(id(2), 4)], 1.0).unwrap(),
        ]
    }

    #[test]
    fn only_unconsumed_requirements_are_capped() {
        let heuristic = ToolCapHeuristic::new(&recipes(), &Goal::at_least(3, []), &Inventory::empty(3));
        assert_eq!(heuristic.durable_items(), 1);
        assert_eq!(heuristic.estimate(&Inventory::from_quantities(vec![9, 1, 9])), 0.0);
        assert!(heuristic.estimate(&Inventory::from_quantities(vec![0, 2, 0])).is_infinite());
    }

    #[test]
    fn goal_targets_raise_the_cap() {
        let heuristic = ToolCapHeuristic::new(
            &recipes(),
            &Goal::at_least(3, [(id(1), 2)]),
            &Inventory::empty(3),
        );
        assert_eq!(heuristic.estimate(&Inventory::from_quantities(vec![0, 2, 0])), 0.0);
        assert!(heuristic.estimate(&Inventory::from_quantities(vec![0, 3, 0])).is_infinite());
    }

    #[test]
    fn starting_tools_raise_the_cap() {
        let start = Inventory::from_quantities(vec![0, 2, 0]);
        let heuristic =
            ToolCapHeuristic::new(&recipes(), &Goal::at_least(3, [(id(2), 4)]), &start);
        assert_eq!(heuristic.estimate(&start), 0.0);
        assert_eq!(heuristic.estimate(&Inventory::from_quantities(vec![1, 2, 0])), 0.0);
        assert!(heuristic.estimate(&Inventory::from_quantities(vec![0, 3, 0])).is_infinite());
    }

    #[test]
    fn at_most_baseline_raises_the_cap() {
        let heuristic = ToolCapHeuristic::new(
            &recipes(),
            &Goal::at_most(3, [(id(1), 3)]),
            &Inventory::empty(3),
        );
        assert_eq!(heuristic.estimate(&Inventory::from_quantities(vec![0, 3, 0])), 0.0);
        assert!(heuristic.estimate(&Inventory::from_quantities(vec![0, 4, 0])).is_infinite());
    }

    #[test]
    fn closures_are_heuristics() {
        let wood_left = |s: &Inventory| f64::from(s.get(id(0)));
        assert_eq!(wood_left.estimate(&Inventory::from_quantities(vec![3, 0, 0])), 3.0);
        assert_eq!(ZeroHeuristic.estimate(&Inventory::empty(3)), 0.0);
    }
}
