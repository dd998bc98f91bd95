use std::collections::HashMap;

use crate::state::SearchState;

/// Best cumulative cost known for each search state.
///
/// Keyed by the full state rather than the cell: two arrivals at the same
/// cell with different pending runs are not comparable.
#[derive(Debug, Default)]
pub struct DominanceMap {
    best: HashMap<SearchState, u64>,
}

impl DominanceMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn best_known(&self, state: &SearchState) -> Option<u64> {
        self.best.get(state).copied()
    }

    /// Store `cost` for `state` if it is strictly cheaper than the current
    /// entry. Returns whether the entry changed.
    pub fn record(&mut self, state: SearchState, cost: u64) -> bool {
        match self.best.get_mut(&state) {
            Some(existing) if *existing <= cost => false,
            Some(existing) => {
                *existing = cost;
                true
            }
            None => {
                self.best.insert(state, cost);
                true
            }
        }
    }

    /// Whether an entry popped at `cost` has since been beaten.
    pub fn is_stale(&self, state: &SearchState, cost: u64) -> bool {
        self.best_known(state).is_some_and(|best| best < cost)
    }

    /// Number of distinct states seen.
    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}
