use crate::compiler::{CompiledCrafting, CompiledRecipe};
use crate::error::PlanError;
use crate::goal::Goal;
use crate::inventory::Inventory;
use std::fmt;
use std::time::Duration;
use tracing::{info, trace};

mod clock;
mod expansion;
mod frontier;
mod heuristic;
mod path;

pub use clock::{Clock, ManualClock, SystemClock};
pub use expansion::{Expansion, Successor, expand};
pub use heuristic::{Heuristic, ToolCapHeuristic, ZeroHeuristic};
pub use path::PlanStep;

use frontier::Frontier;
use path::{ParentLink, ParentMap, reconstruct};

/// Why a search stopped without reaching the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    /// The time budget ran out while states were still queued.
    TimeExceeded,
    /// Every reachable state was expanded and none satisfied the goal.
    FrontierExhausted,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::TimeExceeded => write!(f, "time limit exceeded"),
            FailureReason::FrontierExhausted => write!(f, "frontier exhausted"),
        }
    }
}

/// Counters collected during a single search.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SearchStats {
    /// States popped from the frontier and expanded.
    pub expansions: usize,
    /// States recorded in the parent map, including the start.
    pub discovered: usize,
    /// Discovered states the heuristic marked as dead ends.
    pub pruned: usize,
    /// Largest frontier size seen.
    pub peak_frontier: usize,
    pub elapsed: Duration,
}

/// A successful search result.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    /// States from start to goal. The first step has no action.
    pub steps: Vec<PlanStep>,
    pub total_cost: f64,
    pub stats: SearchStats,
}

impl Plan {
    /// The actions in execution order.
    pub fn actions(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().filter_map(|step| step.action.as_deref())
    }

    /// Number of actions in the plan.
    pub fn len(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn final_state(&self) -> Option<&Inventory> {
        self.steps.last().map(|step| &step.state)
    }
}

/// Search settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannerConfig {
    /// Wall-clock budget. Checked once per iteration, so a search can run
    /// over by at most the cost of one expansion.
    pub time_limit: Duration,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(5),
        }
    }
}

impl PlannerConfig {
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }
}

/// Finds minimum-cost plans over a fixed recipe set.
///
/// A `Planner` holds only read-only data. Every call to `plan` owns its own
/// frontier and parent map, so a planner can serve several searches, one
/// after another or from several threads.
pub struct Planner {
    recipes: Vec<CompiledRecipe>,
    config: PlannerConfig,
    heuristic: Box<dyn Heuristic>,
    clock: Box<dyn Clock>,
}

impl Planner {
    pub fn new(recipes: Vec<CompiledRecipe>) -> Self {
        Self {
            recipes,
            config: PlannerConfig::default(),
            heuristic: Box::new(ZeroHeuristic),
            clock: Box::new(SystemClock::new()),
        }
    }

    /// A planner over the accepted recipes of a compiled definition.
    pub fn from_compiled(compiled: &CompiledCrafting) -> Self {
        Self::new(compiled.recipes.clone())
    }

    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.config.time_limit = time_limit;
        self
    }

    pub fn with_heuristic(mut self, heuristic: impl Heuristic + 'static) -> Self {
        self.heuristic = Box::new(heuristic);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn recipes(&self) -> &[CompiledRecipe] {
        &self.recipes
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Searches for the cheapest plan from `initial` to a state satisfying `goal`.
    pub fn plan(&self, initial: &Inventory, goal: &Goal) -> Result<Plan, PlanError> {
        search(
            &self.recipes,
            initial,
            goal,
            self.config.time_limit,
            self.heuristic.as_ref(),
            self.clock.as_ref(),
        )
    }
}

/// Searches for the cheapest plan using the system clock.
///
/// Passing `&ZeroHeuristic` gives uniform-cost search.
pub fn plan(
    initial: &Inventory,
    goal: &Goal,
    recipes: &[CompiledRecipe],
    time_limit: Duration,
    heuristic: &dyn Heuristic,
) -> Result<Plan, PlanError> {
    search(
        recipes,
        initial,
        goal,
        time_limit,
        heuristic,
        &SystemClock::new(),
    )
}

/// The cost-ordered frontier search.
///
/// A state is recorded the first time it is discovered and never again, even
/// if a cheaper path to it turns up later. With positive step costs and a
/// zero or consistent heuristic, the first goal popped is optimal.
fn search(
    recipes: &[CompiledRecipe],
    initial: &Inventory,
    goal: &Goal,
    time_limit: Duration,
    heuristic: &dyn Heuristic,
    clock: &dyn Clock,
) -> Result<Plan, PlanError> {
    if time_limit.is_zero() {
        return Err(PlanError::InvalidTimeLimit(time_limit));
    }
    let expected = recipes
        .iter()
        .map(CompiledRecipe::item_span)
        .fold(goal.item_count(), usize::max);
    if initial.len() < expected {
        return Err(PlanError::InventoryMismatch {
            expected,
            got: initial.len(),
        });
    }

    let started = clock.now();
    let mut stats = SearchStats::default();
    let mut parents = ParentMap::default();
    let mut frontier = Frontier::new();

    parents.insert(initial.clone(), ParentLink::root());
    stats.discovered = 1;
    let start_estimate = heuristic.estimate(initial);
    let start_priority = if start_estimate.is_finite() {
        start_estimate
    } else {
        0.0
    };
    frontier.push(initial.clone(), 0.0, start_priority);

    let reason = loop {
        if frontier.is_empty() {
            break FailureReason::FrontierExhausted;
        }
        stats.elapsed = clock.now().saturating_sub(started);
        if stats.elapsed >= time_limit {
            break FailureReason::TimeExceeded;
        }
        let Some(node) = frontier.pop() else {
            break FailureReason::FrontierExhausted;
        };

        if goal.is_satisfied_by(&node.state) {
            stats.peak_frontier = frontier.peak();
            let (steps, total_cost) = reconstruct(&parents, recipes, node.state);
            info!(
                cost = total_cost,
                actions = steps.len().saturating_sub(1),
                expansions = stats.expansions,
                discovered = stats.discovered,
                elapsed = ?stats.elapsed,
                "plan found"
            );
            return Ok(Plan {
                steps,
                total_cost,
                stats,
            });
        }

        stats.expansions += 1;
        trace!(cost = node.cost, priority = node.priority, "expanding state");

        for successor in expand(recipes, &node.state) {
            let successor = successor?;
            if parents.contains_key(&successor.state) {
                continue;
            }
            let cost = node.cost + successor.cost;
            let estimate = heuristic.estimate(&successor.state);
            parents.insert(
                successor.state.clone(),
                ParentLink {
                    predecessor: Some(node.state.clone()),
                    recipe: Some(successor.recipe_index),
                    cost,
                },
            );
            stats.discovered += 1;
            if !estimate.is_finite() {
                stats.pruned += 1;
                continue;
            }
            frontier.push(successor.state, cost, cost + estimate);
        }
    };

    stats.peak_frontier = frontier.peak();
    info!(
        %reason,
        expansions = stats.expansions,
        discovered = stats.discovered,
        elapsed = ?stats.elapsed,
        "no plan found"
    );
    Err(PlanError::NotFound { reason, stats })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::ItemId;

    fn id(i: usize) -> ItemId {
        ItemId::new(i)
    }

    #[test]
    fn zero_time_limit_is_rejected() {
        let result = plan(
            &Inventory::empty(1),
            &Goal::at_least(1, []),
            &[],
            Duration::ZERO,
            &ZeroHeuristic,
        );
        assert_eq!(result.unwrap_err(), PlanError::InvalidTimeLimit(Duration::ZERO));
    }

    #[test]
    fn short_initial_inventory_is_rejected() {
        let recipes = vec![CompiledRecipe::new("chop", [], [], [(id(2), 1)], 1.0).unwrap()];
        let result = plan(
            &Inventory::empty(1),
            &Goal::at_least(3, [(id(2), 1)]),
            &recipes,
            Duration::from_secs(1),
            &ZeroHeuristic,
        );
        assert_eq!(
            result.unwrap_err(),
            PlanError::InventoryMismatch {
                expected: 3,
                got: 1
            }
        );

        let result = plan(
            &Inventory::empty(1),
            &Goal::at_least(1, []),
            &recipes,
            Duration::from_secs(1),
            &ZeroHeuristic,
        );
        assert_eq!(
            result.unwrap_err(),
            PlanError::InventoryMismatch {
                expected: 3,
                got: 1
            }
        );
    }

    #[test]
    fn start_satisfying_goal_yields_empty_plan() {
        let plan = plan(
            &Inventory::from_quantities(vec![2]),
            &Goal::at_least(1, [(id(0), 1)]),
            &[],
            Duration::from_secs(1),
            &ZeroHeuristic,
        )
        .unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.total_cost, 0.0);
        assert_eq!(plan.steps.len(), 1);
    }

    #[test]
    fn pruned_states_are_not_expanded() {
        let recipes = vec![CompiledRecipe::new("chop", [], [], [(id(0), 1)], 1.0).unwrap()];
        let cap_at_two = |s: &Inventory| if s.get(id(0)) > 2 { f64::INFINITY } else { 0.0 };
        let err = plan(
            &Inventory::empty(1),
            &Goal::at_least(1, [(id(0), 5)]),
            &recipes,
            Duration::from_secs(5),
            &cap_at_two,
        )
        .unwrap_err();
        match err {
            PlanError::NotFound { reason, stats } => {
                assert_eq!(reason, FailureReason::FrontierExhausted);
                assert_eq!(stats.expansions, 3);
                assert_eq!(stats.pruned, 1);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn first_discovery_wins() {
        // Both routes reach {1 wood}; "slow chop" is declared first, so the
        // expensive edge records the state and the cheap one is ignored.
        let recipes = vec![
            CompiledRecipe::new("slow chop", [], [], [(id(0), 1)], 5.0).unwrap(),
            CompiledRecipe::new("fast chop", [], [], [(id(0), 1)], 1.0).unwrap(),
        ];
        let plan = plan(
            &Inventory::empty(1),
            &Goal::at_least(1, [(id(0), 1)]),
            &recipes,
            Duration::from_secs(5),
            &ZeroHeuristic,
        )
        .unwrap();
        assert_eq!(plan.actions().collect::<Vec<_>>(), ["slow chop"]);
        assert_eq!(plan.total_cost, 5.0);
    }
}
