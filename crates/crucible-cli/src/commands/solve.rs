//! Solve command handler for computing least-cost routes over a grid file.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use tracing::info;

use crucible_lib::{load_grid, solve_with_path, CostGrid, OriginSeed, RunLimits, SearchConfig};

use crate::output::{render_json, render_text, OutputFormat, TextStyle, VariantReport};
use crate::terminal::{supports_unicode, ColorPalette};

/// Canonical run-limit presets selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Variant {
    /// Turn at will, at most three moves in a row.
    Basic,
    /// Four to ten moves in a row.
    Ultra,
    /// Run both presets.
    #[default]
    Both,
}

/// Arguments for the solve command.
#[derive(Debug, Clone)]
pub struct SolveCommandArgs {
    /// Grid file, one row of digits per line.
    pub input: PathBuf,
    pub variant: Variant,
    /// Custom minimum run; overrides `variant` together with `max_run`.
    pub min_run: Option<u32>,
    pub max_run: Option<u32>,
    /// Seed the origin without a heading instead of east/south.
    pub unoriented: bool,
    pub show_path: bool,
    pub stats: bool,
    pub format: OutputFormat,
}

impl SolveCommandArgs {
    /// Labelled run limits to search, in output order.
    pub fn variants(&self) -> Result<Vec<(String, RunLimits)>> {
        match (self.min_run, self.max_run) {
            (Some(min_run), Some(max_run)) => {
                let limits = RunLimits::new(min_run, max_run)?;
                Ok(vec![("custom".to_string(), limits)])
            }
            (None, None) => Ok(match self.variant {
                Variant::Basic => vec![("basic".to_string(), RunLimits::BASIC)],
                Variant::Ultra => vec![("ultra".to_string(), RunLimits::ULTRA)],
                Variant::Both => vec![
                    ("basic".to_string(), RunLimits::BASIC),
                    ("ultra".to_string(), RunLimits::ULTRA),
                ],
            }),
            _ => bail!("--min-run and --max-run must be given together"),
        }
    }

    fn config(&self, limits: RunLimits) -> SearchConfig {
        let seed = if self.unoriented {
            OriginSeed::Unoriented
        } else {
            OriginSeed::AxisAligned
        };
        SearchConfig::new(limits).with_seed(seed)
    }
}

/// Load the grid and solve every requested variant.
pub fn run_solve(args: &SolveCommandArgs) -> Result<(CostGrid, Vec<VariantReport>)> {
    let variants = args.variants()?;
    let grid = load_grid(&args.input)
        .with_context(|| format!("failed to load grid from {}", args.input.display()))?;

    let mut reports = Vec::with_capacity(variants.len());
    for (label, limits) in variants {
        let solution = solve_with_path(&grid, args.config(limits))
            .with_context(|| format!("{label} search ({limits}) failed"))?;
        info!(variant = %label, cost = solution.cost, pops = solution.stats.pops, "solved");

        let mut report = VariantReport::new(label, limits, solution.cost);
        if args.show_path {
            report = report.with_path(solution.path);
        }
        if args.stats {
            report = report.with_stats(solution.stats);
        }
        reports.push(report);
    }
    Ok((grid, reports))
}

/// Handle the solve subcommand, printing results to stdout.
pub fn handle_solve_command(args: &SolveCommandArgs) -> Result<()> {
    let (grid, reports) = run_solve(args)?;
    match args.format {
        OutputFormat::Text => {
            let style = TextStyle {
                palette: ColorPalette::detect(),
                unicode: supports_unicode(),
            };
            print!("{}", render_text(&reports, &grid, style));
        }
        OutputFormat::Json => {
            println!("{}", render_json(&reports).context("failed to encode JSON output")?);
        }
    }
    Ok(())
}
