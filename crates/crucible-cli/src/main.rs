use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crucible_cli::commands::solve::{handle_solve_command, SolveCommandArgs, Variant};
use crucible_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Least-cost grid search under run-length limits")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the cheapest route from the top-left to the bottom-right cell.
    Solve {
        /// Grid file, one row of digits per line.
        input: PathBuf,
        /// Run-limit preset to search with.
        #[arg(long, value_enum, default_value_t = Variant::Both)]
        variant: Variant,
        /// Custom minimum run length (requires --max-run).
        #[arg(long, requires = "max_run")]
        min_run: Option<u32>,
        /// Custom maximum run length (requires --min-run).
        #[arg(long, requires = "min_run")]
        max_run: Option<u32>,
        /// Start without a heading so the first move may go in any direction.
        #[arg(long)]
        unoriented: bool,
        /// Print the move list and a path overlay.
        #[arg(long)]
        show_path: bool,
        /// Print search counters.
        #[arg(long)]
        stats: bool,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Solve {
            input,
            variant,
            min_run,
            max_run,
            unoriented,
            show_path,
            stats,
            format,
        } => handle_solve_command(&SolveCommandArgs {
            input,
            variant,
            min_run,
            max_run,
            unoriented,
            show_path,
            stats,
            format,
        }),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
