//! CLI entry point for percolation threshold experiments

use clap::Parser;
use percolate::io::cli::{Cli, ExperimentRunner};

fn main() -> percolate::Result<()> {
    let cli = Cli::parse();
    let mut runner = ExperimentRunner::new(cli);
    runner.process()
}
