use crate::inventory::Inventory;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A discovered state waiting to be expanded.
#[derive(Debug, Clone)]
pub(crate) struct FrontierNode {
    pub(crate) state: Inventory,
    pub(crate) cost: f64,
    pub(crate) priority: f64,
}

impl PartialEq for FrontierNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierNode {}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Reversed so the max-heap pops the smallest priority first. Ties fall back
// to the cheaper path, then to the smaller state.
impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.cost.total_cmp(&self.cost))
            .then_with(|| other.state.cmp(&self.state))
    }
}

/// A min-priority queue of discovered states.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<FrontierNode>,
    peak: usize,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, state: Inventory, cost: f64, priority: f64) {
        self.heap.push(FrontierNode {
            state,
            cost,
            priority,
        });
        self.peak = self.peak.max(self.heap.len());
    }

    pub(crate) fn pop(&mut self) -> Option<FrontierNode> {
        self.heap.pop()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The largest size the frontier reached.
    pub(crate) fn peak(&self) -> usize {
        self.peak
    }
}
