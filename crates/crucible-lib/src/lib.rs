//! Crucible library entry points.
//!
//! This crate finds the cheapest route across a grid of cell costs when the
//! route must respect directional run-length limits: at least `min_run` moves
//! in a straight line before turning (or stopping) and at most `max_run`
//! before a turn is forced. Higher-level consumers (the CLI) should only
//! depend on the items exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod direction;
pub mod dominance;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod path;
pub mod search;
pub mod state;

pub use direction::Direction;
pub use dominance::DominanceMap;
pub use error::{Error, Result};
pub use frontier::{Frontier, FrontierEntry, NodeId};
pub use grid::{load_grid, CostGrid, Position};
pub use path::{Move, PathStep, SearchPath};
pub use search::{
    solve, solve_with_path, OriginSeed, SearchConfig, SearchDriver, SearchNode, SearchStats,
    SearchStatus, SearchStep, Solution,
};
pub use state::{RunLimits, SearchState, Transition};
