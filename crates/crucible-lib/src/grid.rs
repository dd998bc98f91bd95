//! Immutable cost grid and its plain-text loader.
//!
//! The text format is one row per line, one decimal digit per cell. Leading
//! and trailing blank lines and surrounding whitespace on each line are
//! ignored.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::direction::Direction;
use crate::error::{Error, Result};

/// Zero-based cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan (L1) distance between two positions.
    pub fn manhattan(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Rectangular grid of non-negative cell costs, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostGrid {
    cells: Vec<u32>,
    height: usize,
    width: usize,
}

impl CostGrid {
    /// Build a grid from rows of costs. Every row must have the same,
    /// non-zero length; the first non-empty row sets the width.
    pub fn new(rows: Vec<Vec<u32>>) -> Result<Self> {
        let Some(width) = rows.iter().map(Vec::len).find(|&len| len > 0) else {
            return Err(Error::EmptyGrid);
        };

        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(Error::RaggedRow {
                    line: index + 1,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }

        Ok(Self {
            cells,
            height,
            width,
        })
    }

    /// Parse a digit grid from text.
    ///
    /// Blank lines before the first row and after the last are skipped; a
    /// blank line between rows is a zero-width row. Reported lines and
    /// columns are 1-based positions in `text`.
    pub fn parse(text: &str) -> Result<Self> {
        let mut rows: Vec<Vec<u32>> = Vec::new();
        let mut width = 0;
        let mut blank_line = None;

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let content = raw.trim_end();
            if content.is_empty() {
                if !rows.is_empty() {
                    blank_line.get_or_insert(line);
                }
                continue;
            }
            if let Some(blank) = blank_line {
                return Err(Error::RaggedRow {
                    line: blank,
                    expected: width,
                    found: 0,
                });
            }

            let indent = content.chars().take_while(|ch| ch.is_whitespace()).count();
            let row = content
                .chars()
                .enumerate()
                .skip(indent)
                .map(|(col, ch)| {
                    ch.to_digit(10).ok_or(Error::Parse {
                        line,
                        column: col + 1,
                        found: ch,
                    })
                })
                .collect::<Result<Vec<u32>>>()?;

            if rows.is_empty() {
                width = row.len();
            } else if row.len() != width {
                return Err(Error::RaggedRow {
                    line,
                    expected: width,
                    found: row.len(),
                });
            }
            rows.push(row);
        }
        Self::new(rows)
    }

    /// `(height, width)` of the grid.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    /// Cost of entering `pos`.
    pub fn cost(&self, pos: Position) -> Result<u32> {
        if !self.contains(pos) {
            return Err(Error::OutOfBounds {
                row: pos.row,
                col: pos.col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(self.cells[pos.row * self.width + pos.col])
    }

    /// Top-left cell.
    pub fn origin(&self) -> Position {
        Position::new(0, 0)
    }

    /// Bottom-right cell.
    pub fn goal(&self) -> Position {
        Position::new(self.height - 1, self.width - 1)
    }

    /// Neighbour of `pos` one step in `dir`, or `None` when it leaves the grid.
    pub fn step(&self, pos: Position, dir: Direction) -> Option<Position> {
        let (dr, dc) = dir.delta();
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;
        let next = Position::new(row, col);
        self.contains(next).then_some(next)
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.cells.chunks(self.width)
    }
}

impl FromStr for CostGrid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CostGrid::parse(s)
    }
}

/// Read and parse a digit grid from a file.
pub fn load_grid(path: &Path) -> Result<CostGrid> {
    let text = fs::read_to_string(path)?;
    let grid = CostGrid::parse(&text)?;
    let (height, width) = grid.dimensions();
    debug!(path = %path.display(), height, width, "loaded cost grid");
    Ok(grid)
}
