//! Search states and the run-length transition rules.
//!
//! A state is the cell reached together with the heading of the last move and
//! how many consecutive moves were made in that heading. [`RunLimits`] is the
//! only place the straight-run policy is encoded; both canonical variants run
//! on the same engine by swapping limits.

use std::fmt;

use serde::Serialize;

use crate::direction::Direction;
use crate::error::{Error, Result};
use crate::grid::{CostGrid, Position};

/// Composite dominance key: position, heading of the last move, run length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SearchState {
    pub position: Position,
    /// `None` only for an unoriented origin before any move.
    pub heading: Option<Direction>,
    pub run: u32,
}

impl SearchState {
    pub fn new(position: Position, heading: Direction, run: u32) -> Self {
        Self {
            position,
            heading: Some(heading),
            run,
        }
    }

    /// Origin state with no move made yet.
    pub fn unoriented(position: Position) -> Self {
        Self {
            position,
            heading: None,
            run: 0,
        }
    }
}

/// A legal successor together with the cost of entering it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: SearchState,
    pub step_cost: u32,
}

/// Minimum and maximum number of consecutive moves in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RunLimits {
    pub min_run: u32,
    pub max_run: u32,
}

impl RunLimits {
    /// At most three moves in a row, turning allowed at any time.
    pub const BASIC: RunLimits = RunLimits {
        min_run: 1,
        max_run: 3,
    };

    /// At least four and at most ten moves in a row.
    pub const ULTRA: RunLimits = RunLimits {
        min_run: 4,
        max_run: 10,
    };

    /// Build validated limits.
    pub fn new(min_run: u32, max_run: u32) -> Result<Self> {
        let limits = Self { min_run, max_run };
        limits.validate()?;
        Ok(limits)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_run < 1 {
            return Err(Error::invalid_config("min_run must be at least 1"));
        }
        if self.max_run < self.min_run {
            return Err(Error::invalid_config(format!(
                "max_run ({}) must not be below min_run ({})",
                self.max_run, self.min_run
            )));
        }
        Ok(())
    }

    /// Whether a popped state ends the search at `goal`.
    ///
    /// A state that has not moved yet only qualifies when origin and goal
    /// coincide; otherwise the final straight run must have reached `min_run`.
    pub fn is_terminal(&self, state: &SearchState, goal: Position) -> bool {
        state.position == goal && (state.heading.is_none() || state.run >= self.min_run)
    }

    /// Append every legal successor of `state` to `out`.
    ///
    /// The caller clears `out` beforehand. Fails only with `OutOfBounds`,
    /// which would mean a candidate escaped the bounds check.
    pub fn transitions(
        &self,
        grid: &CostGrid,
        state: &SearchState,
        out: &mut Vec<Transition>,
    ) -> Result<()> {
        let Some(heading) = state.heading else {
            for dir in Direction::ALL {
                self.push_move(grid, state.position, dir, 1, out)?;
            }
            return Ok(());
        };

        if state.run < self.max_run {
            self.push_move(grid, state.position, heading, state.run + 1, out)?;
        }
        if state.run >= self.min_run {
            self.push_move(grid, state.position, heading.turn_left(), 1, out)?;
            self.push_move(grid, state.position, heading.turn_right(), 1, out)?;
        }
        Ok(())
    }

    fn push_move(
        &self,
        grid: &CostGrid,
        from: Position,
        dir: Direction,
        run: u32,
        out: &mut Vec<Transition>,
    ) -> Result<()> {
        let Some(next) = grid.step(from, dir) else {
            return Ok(());
        };
        out.push(Transition {
            state: SearchState::new(next, dir, run),
            step_cost: grid.cost(next)?,
        });
        Ok(())
    }
}

impl Default for RunLimits {
    fn default() -> Self {
        RunLimits::BASIC
    }
}

impl fmt::Display for RunLimits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min_run, self.max_run)
    }
}
