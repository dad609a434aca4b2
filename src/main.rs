mod bench_cmd;
mod cli;
mod convert;
mod logging;
mod pipeline;
mod plot;
mod plot_cmd;
mod report;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Bench(args) => bench_cmd::run(args),
        Command::Plot(args) => plot_cmd::run(args),
    }
}
