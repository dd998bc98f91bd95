#![allow(dead_code)]

use std::path::PathBuf;

use crucible_lib::{load_grid, CostGrid};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// 13x13 reference grid.
pub fn example_grid() -> CostGrid {
    load_grid(&fixtures_dir().join("example_grid.txt")).expect("load fixture example_grid.txt")
}

/// 5x12 grid whose cheap corridor forces long straight runs.
pub fn ultra_grid() -> CostGrid {
    load_grid(&fixtures_dir().join("ultra_grid.txt")).expect("load fixture ultra_grid.txt")
}
