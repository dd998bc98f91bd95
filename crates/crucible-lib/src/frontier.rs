use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::Serialize;

/// Index of a node in the search arena. Only a driver mints ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Pending node in the frontier.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FrontierEntry {
    pub node: NodeId,
    pub cost: u64,
}

impl FrontierEntry {
    pub fn new(node: NodeId, cost: u64) -> Self {
        Self { node, cost }
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of pending nodes ordered by cumulative cost.
///
/// Entries are never re-keyed or removed early. A cheaper route to a state is
/// pushed as a new entry and the superseded one is discarded by the driver
/// when it is popped.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: FrontierEntry) {
        self.heap.push(entry);
    }

    /// Cheapest pending entry, or `None` once the frontier is empty.
    pub fn pop_min(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_ascending_cost_order() {
        let mut frontier = Frontier::new();
        for (id, cost) in [(0, 9), (1, 3), (2, 7), (3, 3), (4, 0)] {
            frontier.push(FrontierEntry::new(NodeId(id), cost));
        }

        let mut popped = Vec::new();
        while let Some(entry) = frontier.pop_min() {
            popped.push(entry.cost);
        }
        assert_eq!(popped, vec![0, 3, 3, 7, 9]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        let mut frontier = Frontier::new();
        frontier.push(FrontierEntry::new(NodeId(5), 4));
        frontier.push(FrontierEntry::new(NodeId(2), 4));
        assert_eq!(frontier.pop_min().map(|e| e.node), Some(NodeId(2)));
        assert_eq!(frontier.pop_min().map(|e| e.node), Some(NodeId(5)));
        assert_eq!(frontier.pop_min(), None);
    }

    #[test]
    fn keeps_duplicate_entries() {
        let mut frontier = Frontier::new();
        frontier.push(FrontierEntry::new(NodeId(0), 8));
        frontier.push(FrontierEntry::new(NodeId(0), 8));
        assert_eq!(frontier.len(), 2);
    }
}
