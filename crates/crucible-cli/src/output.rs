//! Output formatting for search results.

use clap::ValueEnum;
use serde::Serialize;

use crucible_lib::{CostGrid, Direction, Move, Position, RunLimits, SearchPath, SearchStats};

use crate::terminal::{format_with_separators, ColorPalette};

/// Output format for the `solve` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// A JSON array with one object per variant.
    Json,
}

/// Result of one variant, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct VariantReport {
    pub variant: String,
    pub min_run: u32,
    pub max_run: u32,
    pub cost: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moves: Option<Vec<Move>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<SearchStats>,
    #[serde(skip)]
    pub path: Option<SearchPath>,
}

impl VariantReport {
    pub fn new(variant: impl Into<String>, limits: RunLimits, cost: u64) -> Self {
        Self {
            variant: variant.into(),
            min_run: limits.min_run,
            max_run: limits.max_run,
            cost,
            moves: None,
            stats: None,
            path: None,
        }
    }

    pub fn with_path(mut self, path: SearchPath) -> Self {
        self.moves = Some(path.moves().to_vec());
        self.path = Some(path);
        self
    }

    pub fn with_stats(mut self, stats: SearchStats) -> Self {
        self.stats = Some(stats);
        self
    }
}

/// Rendering switches for text output.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub palette: ColorPalette,
    pub unicode: bool,
}

impl TextStyle {
    pub fn plain() -> Self {
        Self {
            palette: ColorPalette::plain(),
            unicode: false,
        }
    }
}

/// Render reports as text, one `<variant>: <cost>` line each, followed by
/// moves, stats and the path overlay when present.
pub fn render_text(reports: &[VariantReport], grid: &CostGrid, style: TextStyle) -> String {
    let p = style.palette;
    let mut out = String::new();
    for report in reports {
        out.push_str(&format!(
            "{}{}{}: {}\n",
            p.white_bold, report.variant, p.reset, report.cost
        ));

        if let Some(moves) = &report.moves {
            out.push_str(&format!("  moves: {}\n", format_moves(moves)));
        }

        if let Some(stats) = &report.stats {
            out.push_str(&format!(
                "  {}popped {} ({} stale), pushed {}, states {}{}\n",
                p.gray,
                format_with_separators(stats.pops as u64),
                format_with_separators(stats.stale as u64),
                format_with_separators(stats.pushed as u64),
                format_with_separators(stats.states as u64),
                p.reset
            ));
        }

        if let Some(path) = &report.path {
            out.push('\n');
            out.push_str(&render_overlay(grid, path, style));
            out.push('\n');
        }
    }
    out
}

/// Compact move list such as `E2 S1 E3`.
pub fn format_moves(moves: &[Move]) -> String {
    if moves.is_empty() {
        return "(none)".to_string();
    }
    moves
        .iter()
        .map(|mv| format!("{}{}", direction_letter(mv.direction), mv.length))
        .collect::<Vec<_>>()
        .join(" ")
}

fn direction_letter(dir: Direction) -> char {
    match dir {
        Direction::North => 'N',
        Direction::East => 'E',
        Direction::South => 'S',
        Direction::West => 'W',
    }
}

/// Overlay glyph for off-path cells whose cost is not a single digit.
pub const WIDE_COST_GLYPH: char = '+';

fn ascii_glyph(dir: Direction) -> char {
    match dir {
        Direction::North => '^',
        Direction::East => '>',
        Direction::South => 'v',
        Direction::West => '<',
    }
}

/// Draw the grid with the path's arrows over the cells it enters.
///
/// The origin keeps its digit and is highlighted together with the final
/// cell. Cells costing more than 9 have no single digit and are drawn as
/// [`WIDE_COST_GLYPH`].
pub fn render_overlay(grid: &CostGrid, path: &SearchPath, style: TextStyle) -> String {
    let p = style.palette;
    let (height, width) = grid.dimensions();
    let mut arrows: Vec<Option<Direction>> = vec![None; height * width];
    for step in path.steps() {
        arrows[step.position.row * width + step.position.col] = Some(step.direction);
    }
    let origin = path.origin();
    let end = path.cells().last().copied().unwrap_or(origin);

    let mut out = String::new();
    for (row, costs) in grid.rows().enumerate() {
        for (col, cost) in costs.iter().enumerate() {
            let pos = Position::new(row, col);
            let glyph = match arrows[row * width + col] {
                Some(dir) if style.unicode => dir.glyph(),
                Some(dir) => ascii_glyph(dir),
                None => char::from_digit(*cost, 10).unwrap_or(WIDE_COST_GLYPH),
            };
            let color = if pos == origin || pos == end {
                p.endpoint
            } else if arrows[row * width + col].is_some() {
                p.path
            } else {
                p.gray
            };
            out.push_str(color);
            out.push(glyph);
            out.push_str(p.reset);
        }
        out.push('\n');
    }
    out
}

/// Serialize reports as pretty JSON.
pub fn render_json(reports: &[VariantReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crucible_lib::{solve_with_path, SearchConfig};

    fn solved(text: &str) -> (CostGrid, SearchPath) {
        let grid = CostGrid::parse(text).unwrap();
        let solution = solve_with_path(&grid, SearchConfig::new(RunLimits::BASIC)).unwrap();
        (grid, solution.path)
    }

    #[test]
    fn moves_are_compact() {
        let moves = [
            Move {
                direction: Direction::East,
                length: 2,
            },
            Move {
                direction: Direction::South,
                length: 1,
            },
        ];
        assert_eq!(format_moves(&moves), "E2 S1");
        assert_eq!(format_moves(&[]), "(none)");
    }

    #[test]
    fn overlay_marks_path_cells_with_arrows() {
        let (grid, path) = solved("111\n991\n991");
        let rendered = render_overlay(&grid, &path, TextStyle::plain());
        assert_eq!(rendered, "1>>\n99v\n99v\n");
    }

    #[test]
    fn overlay_uses_unicode_arrows_when_supported() {
        let (grid, path) = solved("11\n91");
        let style = TextStyle {
            palette: ColorPalette::plain(),
            unicode: true,
        };
        assert_eq!(render_overlay(&grid, &path, style), "1→\n9↓\n");
    }

    #[test]
    fn overlay_marks_multi_digit_costs() {
        let grid = CostGrid::new(vec![vec![1, 1], vec![17, 1]]).unwrap();
        let path = solve_with_path(&grid, SearchConfig::new(RunLimits::BASIC))
            .unwrap()
            .path;
        let rendered = render_overlay(&grid, &path, TextStyle::plain());
        assert_eq!(rendered, "1>\n+v\n");
    }

    #[test]
    fn text_includes_stats_and_overlay() {
        let (grid, path) = solved("11\n91");
        let stats = SearchStats {
            pops: 1234,
            stale: 0,
            expanded: 1200,
            pushed: 1500,
            states: 1400,
        };
        let report = VariantReport::new("basic", RunLimits::BASIC, path.cost())
            .with_path(path)
            .with_stats(stats);
        let text = render_text(&[report], &grid, TextStyle::plain());
        assert_eq!(
            text,
            "basic: 2\n  moves: E1 S1\n  popped 1,234 (0 stale), pushed 1,500, states 1,400\n\n1>\n9v\n\n"
        );
    }

    #[test]
    fn text_lists_cost_and_moves() {
        let (grid, path) = solved("11\n91");
        let report = VariantReport::new("basic", RunLimits::BASIC, path.cost()).with_path(path);
        let text = render_text(&[report], &grid, TextStyle::plain());
        assert!(text.starts_with("basic: 2\n  moves: E1 S1\n"));
    }

    #[test]
    fn json_omits_absent_sections() {
        let report = VariantReport::new("ultra", RunLimits::ULTRA, 94);
        let json = render_json(&[report]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["variant"], "ultra");
        assert_eq!(value[0]["min_run"], 4);
        assert_eq!(value[0]["max_run"], 10);
        assert_eq!(value[0]["cost"], 94);
        assert!(value[0].get("moves").is_none());
        assert!(value[0].get("path").is_none());
    }
}
