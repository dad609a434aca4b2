use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Binomial coefficient strategy benchmark.
#[derive(Parser)]
#[command(
    name = "binom",
    version,
    about = "Benchmarks binomial coefficient strategies over the triangular grid"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Time every strategy over the grid and print a summary.
    Bench(BenchArgs),
    /// Render runtime and approximation-error charts as SVG files.
    Plot(PlotArgs),
}

/// Arguments for the `bench` subcommand.
#[derive(clap::Args)]
pub struct BenchArgs {
    /// Largest row n of the evaluation grid.
    #[arg(short = 'n', long = "max-n", default_value_t = 20)]
    pub max_n: u32,

    /// Cache scope for the memoized strategy: fresh or shared.
    #[arg(long, default_value = "fresh")]
    pub cache: String,

    /// Path for benchmark diagnostics JSON output.
    #[arg(short, long)]
    pub json: Option<PathBuf>,
}

/// Arguments for the `plot` subcommand.
#[derive(clap::Args)]
pub struct PlotArgs {
    /// Largest row n of the evaluation grid.
    #[arg(short = 'n', long = "max-n", default_value_t = 20)]
    pub max_n: u32,

    /// Cache scope for the memoized strategy: fresh or shared.
    #[arg(long, default_value = "fresh")]
    pub cache: String,

    /// Directory for the rendered SVG charts.
    #[arg(short, long, default_value = "plots")]
    pub out_dir: PathBuf,
}
