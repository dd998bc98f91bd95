//! Dijkstra-style relaxation over run-constrained search states.
//!
//! [`SearchDriver`] owns the node arena, the [`DominanceMap`] and the
//! [`Frontier`] for exactly one search. Independent searches (for example
//! the two canonical [`RunLimits`] presets) each build their own driver.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use tracing::{debug, trace};

use crate::direction::Direction;
use crate::dominance::DominanceMap;
use crate::error::{Error, Result};
use crate::frontier::{Frontier, FrontierEntry, NodeId};
use crate::grid::{CostGrid, Position};
use crate::path::{reconstruct, SearchPath};
use crate::state::{RunLimits, SearchState, Transition};

/// How the origin is seeded before the first pop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OriginSeed {
    /// One node heading east and one heading south, each with a virtual run
    /// of `max_run`. The first real move must therefore be a turn, and the
    /// turns available from the two seeds cover all four directions.
    #[default]
    AxisAligned,
    /// A single node with no heading; every direction is a first move.
    Unoriented,
}

/// Parameters of a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchConfig {
    pub limits: RunLimits,
    pub seed: OriginSeed,
    /// Defaults to the top-left cell.
    pub origin: Option<Position>,
    /// Defaults to the bottom-right cell.
    pub goal: Option<Position>,
}

impl SearchConfig {
    pub fn new(limits: RunLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: OriginSeed) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_origin(mut self, origin: Position) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn with_goal(mut self, goal: Position) -> Self {
        self.goal = Some(goal);
        self
    }
}

/// Arena entry: a state reached at `cost`, linked to the node it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub state: SearchState,
    pub cost: u64,
    pub parent: Option<NodeId>,
}

/// Lifecycle of a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Running,
    Found(NodeId),
    Exhausted,
}

/// Outcome of a single pop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStep {
    /// The popped node was current and its successors were relaxed.
    Expanded { cost: u64 },
    /// The popped node had been superseded and was dropped unexpanded.
    Stale { cost: u64 },
    Found(NodeId),
    Exhausted,
}

/// Counters collected while the search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub pops: usize,
    pub stale: usize,
    pub expanded: usize,
    pub pushed: usize,
    pub states: usize,
}

/// Minimal cost and the route that achieves it.
#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    pub cost: u64,
    pub path: SearchPath,
    pub stats: SearchStats,
}

pub struct SearchDriver<'g> {
    grid: &'g CostGrid,
    limits: RunLimits,
    goal: Position,
    nodes: Vec<SearchNode>,
    dominance: DominanceMap,
    frontier: Frontier,
    status: SearchStatus,
    stats: SearchStats,
    scratch: Vec<Transition>,
}

impl<'g> SearchDriver<'g> {
    /// Validate `config` and seed the frontier. No search work happens here.
    pub fn new(grid: &'g CostGrid, config: SearchConfig) -> Result<Self> {
        config.limits.validate()?;

        let origin = config.origin.unwrap_or_else(|| grid.origin());
        let goal = config.goal.unwrap_or_else(|| grid.goal());
        for (label, pos) in [("origin", origin), ("goal", goal)] {
            if !grid.contains(pos) {
                let (height, width) = grid.dimensions();
                return Err(Error::invalid_config(format!(
                    "{label} {pos} lies outside the {height}x{width} grid"
                )));
            }
        }

        let mut driver = Self {
            grid,
            limits: config.limits,
            goal,
            nodes: Vec::new(),
            dominance: DominanceMap::new(),
            frontier: Frontier::new(),
            status: SearchStatus::Running,
            stats: SearchStats::default(),
            scratch: Vec::with_capacity(4),
        };

        match config.seed {
            OriginSeed::AxisAligned => {
                for heading in [Direction::East, Direction::South] {
                    driver.seed(SearchState::new(origin, heading, config.limits.max_run));
                }
            }
            OriginSeed::Unoriented => driver.seed(SearchState::unoriented(origin)),
        }

        debug!(
            %origin,
            %goal,
            limits = %config.limits,
            seed = ?config.seed,
            "starting run-constrained search"
        );
        Ok(driver)
    }

    fn seed(&mut self, state: SearchState) {
        if self.dominance.record(state, 0) {
            self.push_node(state, 0, None);
        }
    }

    fn push_node(&mut self, state: SearchState, cost: u64, parent: Option<NodeId>) {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode {
            state,
            cost,
            parent,
        });
        self.frontier.push(FrontierEntry::new(id, cost));
        self.stats.pushed += 1;
    }

    /// Pop one node and act on it.
    ///
    /// Once the driver has found a terminal node or exhausted the frontier,
    /// further calls keep returning that outcome.
    pub fn step(&mut self) -> Result<SearchStep> {
        match self.status {
            SearchStatus::Found(id) => return Ok(SearchStep::Found(id)),
            SearchStatus::Exhausted => return Ok(SearchStep::Exhausted),
            SearchStatus::Running => {}
        }

        let Some(entry) = self.frontier.pop_min() else {
            self.status = SearchStatus::Exhausted;
            self.stats.states = self.dominance.len();
            return Ok(SearchStep::Exhausted);
        };
        self.stats.pops += 1;

        let node = self.nodes[entry.node.0];
        if self.dominance.is_stale(&node.state, node.cost) {
            self.stats.stale += 1;
            trace!(state = ?node.state, cost = node.cost, "discarding stale frontier entry");
            return Ok(SearchStep::Stale { cost: node.cost });
        }

        if self.limits.is_terminal(&node.state, self.goal) {
            self.status = SearchStatus::Found(entry.node);
            self.stats.states = self.dominance.len();
            return Ok(SearchStep::Found(entry.node));
        }

        let mut scratch = std::mem::take(&mut self.scratch);
        scratch.clear();
        // OutOfBounds here is an engine bug; it aborts the search.
        self.limits.transitions(self.grid, &node.state, &mut scratch)?;
        for transition in &scratch {
            let cost = node.cost + u64::from(transition.step_cost);
            if self.dominance.record(transition.state, cost) {
                self.push_node(transition.state, cost, Some(entry.node));
            }
        }
        self.scratch = scratch;

        self.stats.expanded += 1;
        Ok(SearchStep::Expanded { cost: node.cost })
    }

    /// Run until a terminal node is popped.
    pub fn run(&mut self) -> Result<NodeId> {
        loop {
            match self.step()? {
                SearchStep::Found(id) => return Ok(self.finish(id)),
                SearchStep::Exhausted => return Err(self.exhausted()),
                SearchStep::Expanded { .. } | SearchStep::Stale { .. } => {}
            }
        }
    }

    /// Like [`run`](Self::run), checking `cancel` between pops.
    pub fn run_cancellable(&mut self, cancel: &AtomicBool) -> Result<NodeId> {
        loop {
            if cancel.load(Ordering::Relaxed) {
                debug!(pops = self.stats.pops, "search cancelled");
                return Err(Error::Cancelled);
            }
            match self.step()? {
                SearchStep::Found(id) => return Ok(self.finish(id)),
                SearchStep::Exhausted => return Err(self.exhausted()),
                SearchStep::Expanded { .. } | SearchStep::Stale { .. } => {}
            }
        }
    }

    fn finish(&self, id: NodeId) -> NodeId {
        debug!(
            cost = self.nodes[id.0].cost,
            pops = self.stats.pops,
            stale = self.stats.stale,
            states = self.stats.states,
            "search reached goal"
        );
        id
    }

    fn exhausted(&self) -> Error {
        debug!(
            pops = self.stats.pops,
            states = self.stats.states,
            "frontier exhausted before reaching goal"
        );
        Error::NotFound
    }

    /// Node behind `id`, or `None` for an id this driver never issued.
    pub fn node(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    /// Route from the origin to `terminal`.
    pub fn path(&self, terminal: NodeId) -> Option<SearchPath> {
        reconstruct(&self.nodes, terminal)
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn limits(&self) -> RunLimits {
        self.limits
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn best_known(&self, state: &SearchState) -> Option<u64> {
        self.dominance.best_known(state)
    }

    /// Entries still waiting in the frontier, stale ones included.
    pub fn pending(&self) -> usize {
        self.frontier.len()
    }
}

/// Minimal cost from the top-left to the bottom-right cell.
pub fn solve(grid: &CostGrid, limits: RunLimits) -> Result<u64> {
    let mut driver = SearchDriver::new(grid, SearchConfig::new(limits))?;
    let terminal = driver.run()?;
    driver
        .node(terminal)
        .map(|node| node.cost)
        .ok_or(Error::NotFound)
}

/// Minimal cost together with one route achieving it.
pub fn solve_with_path(grid: &CostGrid, config: SearchConfig) -> Result<Solution> {
    let mut driver = SearchDriver::new(grid, config)?;
    let terminal = driver.run()?;
    let path = driver.path(terminal).ok_or(Error::NotFound)?;
    Ok(Solution {
        cost: path.cost(),
        path,
        stats: driver.stats(),
    })
}
