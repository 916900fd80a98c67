use crate::inventory::{Inventory, ItemId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a goal's quantities are compared against a state.
///
/// The two modes are not interchangeable: a state holding at least the
/// targets can still hold too much under `AtMost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalSemantics {
    /// Every named item must reach its target. Unnamed items are unconstrained.
    #[default]
    AtLeast,
    /// No declared item may exceed its baseline. Unnamed items have a baseline of zero.
    AtMost,
}

impl fmt::Display for GoalSemantics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalSemantics::AtLeast => write!(f, "at least"),
            GoalSemantics::AtMost => write!(f, "at most"),
        }
    }
}

/// A compiled goal condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    semantics: GoalSemantics,
    targets: Vec<(ItemId, u32)>,
    baseline: Box<[u32]>,
}

impl Goal {
    /// Builds a goal over `item_count` declared items.
    ///
    /// A target whose id lies at or past `item_count` widens the goal to
    /// cover it, so no target is ever dropped from the at-most baseline.
    /// The planner then rejects an initial inventory too short for the goal.
    pub fn new<I>(semantics: GoalSemantics, item_count: usize, targets: I) -> Self
    where
        I: IntoIterator<Item = (ItemId, u32)>,
    {
        let targets: Vec<(ItemId, u32)> = targets.into_iter().collect();
        let span = targets
            .iter()
            .map(|(id, _)| id.index() + 1)
            .fold(item_count, usize::max);
        let mut baseline = vec![0; span];
        for &(id, quantity) in &targets {
            baseline[id.index()] = quantity;
        }
        Self {
            semantics,
            targets,
            baseline: baseline.into_boxed_slice(),
        }
    }

    pub fn at_least<I>(item_count: usize, targets: I) -> Self
    where
        I: IntoIterator<Item = (ItemId, u32)>,
    {
        Self::new(GoalSemantics::AtLeast, item_count, targets)
    }

    pub fn at_most<I>(item_count: usize, baseline: I) -> Self
    where
        I: IntoIterator<Item = (ItemId, u32)>,
    {
        Self::new(GoalSemantics::AtMost, item_count, baseline)
    }

    /// Number of items the goal covers.
    pub fn item_count(&self) -> usize {
        self.baseline.len()
    }

    pub fn semantics(&self) -> GoalSemantics {
        self.semantics
    }

    pub fn targets(&self) -> &[(ItemId, u32)] {
        &self.targets
    }

    /// The goal test used by the search.
    pub fn is_satisfied_by(&self, state: &Inventory) -> bool {
        match self.semantics {
            GoalSemantics::AtLeast => self
                .targets
                .iter()
                .all(|&(id, quantity)| state.get(id) >= quantity),
            GoalSemantics::AtMost => state.iter().all(|(id, quantity)| {
                quantity <= self.baseline.get(id.index()).copied().unwrap_or(0)
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(i: usize) -> ItemId {
        ItemId::new(i)
    }

    #[test]
    fn at_least_ignores_unnamed_items() {
        let goal = Goal::at_least(3, [(id(0), 2)]);
        assert!(goal.is_satisfied_by(&Inventory::from_quantities(vec![2, 9, 9])));
        assert!(goal.is_satisfied_by(&Inventory::from_quantities(vec![5, 0, 0])));
        assert!(!goal.is_satisfied_by(&Inventory::from_quantities(vec![1, 9, 9])));
    }

    #[test]
    fn at_most_bounds_every_declared_item() {
        let goal = Goal::at_most(3, [(id(0), 2)]);
        assert!(goal.is_satisfied_by(&Inventory::from_quantities(vec![2, 0, 0])));
        assert!(goal.is_satisfied_by(&Inventory::from_quantities(vec![0, 0, 0])));
        assert!(!goal.is_satisfied_by(&Inventory::from_quantities(vec![2, 1, 0])));
        assert!(!goal.is_satisfied_by(&Inventory::from_quantities(vec![3, 0, 0])));
    }

    #[test]
    fn targets_past_item_count_widen_the_goal() {
        let goal = Goal::at_most(1, [(id(2), 3)]);
        assert_eq!(goal.item_count(), 3);
        assert!(goal.is_satisfied_by(&Inventory::from_quantities(vec![0, 0, 3])));
        assert!(!goal.is_satisfied_by(&Inventory::from_quantities(vec![0, 0, 4])));
        assert_eq!(Goal::at_least(4, [(id(0), 1)]).item_count(), 4);
    }

    #[test]
    fn semantics_disagree_on_surplus() {
        let surplus = Inventory::from_quantities(vec![4, 0]);
        assert!(Goal::at_least(2, [(id(0), 2)]).is_satisfied_by(&surplus));
        assert!(!Goal::at_most(2, [(id(0), 2)]).is_satisfied_by(&surplus));
    }

    #[test]
    fn empty_at_least_goal_is_always_met() {
        let goal = Goal::at_least(2, []);
        assert!(goal.is_satisfied_by(&Inventory::empty(2)));
    }
}
