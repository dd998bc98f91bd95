//! Path reconstruction from the search arena.

use serde::Serialize;

use crate::direction::Direction;
use crate::frontier::NodeId;
use crate::grid::Position;
use crate::search::SearchNode;

/// A straight run of `length` moves in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Move {
    pub direction: Direction,
    pub length: u32,
}

/// Single move into `position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PathStep {
    pub position: Position,
    pub direction: Direction,
}

/// Ordered route from the origin to a terminal node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchPath {
    origin: Position,
    steps: Vec<PathStep>,
    moves: Vec<Move>,
    cost: u64,
}

impl SearchPath {
    pub fn origin(&self) -> Position {
        self.origin
    }

    /// Every cell visited, origin first.
    pub fn cells(&self) -> Vec<Position> {
        std::iter::once(self.origin)
            .chain(self.steps.iter().map(|step| step.position))
            .collect()
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Run-length compressed moves, origin first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Cumulative cost of the terminal node.
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Number of single-cell moves.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Follow parent links from `terminal` back to its seed node.
///
/// Seed nodes carry a virtual heading that is not a move, so the seed only
/// contributes the origin cell. Returns `None` when `terminal` or a parent
/// link does not name a node in `nodes`, or when the links form a cycle.
pub fn reconstruct(nodes: &[SearchNode], terminal: NodeId) -> Option<SearchPath> {
    let mut chain = Vec::new();
    let mut current = Some(terminal);
    while let Some(id) = current {
        if chain.len() == nodes.len() {
            return None;
        }
        let node = nodes.get(id.0)?;
        chain.push(node);
        current = node.parent;
    }
    chain.reverse();

    let origin = chain.first()?.state.position;
    let cost = chain.last()?.cost;
    let steps: Vec<PathStep> = chain
        .iter()
        .skip(1)
        .filter_map(|node| {
            node.state.heading.map(|direction| PathStep {
                position: node.state.position,
                direction,
            })
        })
        .collect();

    Some(SearchPath {
        origin,
        moves: compress(&steps),
        steps,
        cost,
    })
}

fn compress(steps: &[PathStep]) -> Vec<Move> {
    let mut moves: Vec<Move> = Vec::new();
    for step in steps {
        match moves.last_mut() {
            Some(last) if last.direction == step.direction => last.length += 1,
            _ => moves.push(Move {
                direction: step.direction,
                length: 1,
            }),
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SearchState;

    fn node(state: SearchState, cost: u64, parent: Option<usize>) -> SearchNode {
        SearchNode {
            state,
            cost,
            parent: parent.map(NodeId),
        }
    }

    #[test]
    fn walks_parents_back_to_origin() {
        let nodes = vec![
            node(
                SearchState::new(Position::new(0, 0), Direction::East, 3),
                0,
                None,
            ),
            // Unrelated branch that must not leak into the path.
            node(
                SearchState::new(Position::new(1, 0), Direction::South, 1),
                4,
                Some(0),
            ),
            node(
                SearchState::new(Position::new(0, 1), Direction::East, 1),
                2,
                Some(0),
            ),
            node(
                SearchState::new(Position::new(0, 2), Direction::East, 2),
                3,
                Some(2),
            ),
            node(
                SearchState::new(Position::new(1, 2), Direction::South, 1),
                7,
                Some(3),
            ),
        ];

        let path = reconstruct(&nodes, NodeId(4)).expect("linked chain");
        assert_eq!(path.cost(), 7);
        assert_eq!(
            path.cells(),
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 2),
            ]
        );
        assert_eq!(
            path.moves(),
            &[
                Move {
                    direction: Direction::East,
                    length: 2
                },
                Move {
                    direction: Direction::South,
                    length: 1
                },
            ]
        );
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn seed_alone_is_an_empty_path() {
        let nodes = vec![node(SearchState::unoriented(Position::new(0, 0)), 0, None)];
        let path = reconstruct(&nodes, NodeId(0)).expect("seed exists");
        assert!(path.is_empty());
        assert!(path.moves().is_empty());
        assert_eq!(path.cells(), vec![Position::new(0, 0)]);
    }

    #[test]
    fn unknown_ids_yield_none() {
        let nodes = vec![node(SearchState::unoriented(Position::new(0, 0)), 0, None)];
        assert_eq!(reconstruct(&nodes, NodeId(1)), None);
        assert_eq!(reconstruct(&[], NodeId(0)), None);

        let dangling = vec![node(
            SearchState::new(Position::new(0, 1), Direction::East, 1),
            1,
            Some(7),
        )];
        assert_eq!(reconstruct(&dangling, NodeId(0)), None);
    }

    #[test]
    fn parent_cycle_yields_none() {
        let nodes = vec![
            node(
                SearchState::new(Position::new(0, 0), Direction::East, 1),
                0,
                Some(1),
            ),
            node(
                SearchState::new(Position::new(0, 1), Direction::East, 2),
                1,
                Some(0),
            ),
        ];
        assert_eq!(reconstruct(&nodes, NodeId(1)), None);
    }
}
