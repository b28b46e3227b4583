//! Command-line interface for percolation threshold experiments

use crate::algorithm::strategy::StrategyKind;
use crate::analysis::experiment::{Experiment, ExperimentConfig};
use crate::analysis::statistics::ThresholdStatistics;
use crate::io::configuration::{DEFAULT_GRID_SIZE, DEFAULT_SEED, DEFAULT_TRIALS};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "percolate")]
#[command(
    author,
    version,
    about = "Estimate the percolation threshold of an N x N grid"
)]
/// Command-line arguments for the threshold experiment
pub struct Cli {
    /// Grid dimension N
    #[arg(short = 'n', long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Number of independent trials per strategy
    #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,

    /// Random seed for reproducible open orders
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Connectivity strategies to run (comma separated)
    #[arg(
        short = 'k',
        long,
        value_enum,
        value_delimiter = ',',
        default_values_t = [StrategyKind::UnionFind]
    )]
    pub strategy: Vec<StrategyKind>,

    /// Run every available strategy
    #[arg(short, long)]
    pub all: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Strategies to run, without duplicates, in the order given
    pub fn strategies(&self) -> Vec<StrategyKind> {
        if self.all {
            return StrategyKind::ALL.to_vec();
        }

        let mut kinds = Vec::with_capacity(self.strategy.len());
        for &kind in &self.strategy {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        kinds
    }

    /// Experiment parameters shared by every strategy
    pub const fn config(&self) -> ExperimentConfig {
        ExperimentConfig {
            size: self.size,
            trials: self.trials,
            seed: self.seed,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Result of running every trial of one strategy
#[derive(Debug, Clone, Copy)]
pub struct StrategyReport {
    /// Strategy that produced the estimate
    pub kind: StrategyKind,
    /// Aggregated threshold estimate
    pub statistics: ThresholdStatistics,
    /// Wall time spent in trials
    pub elapsed: Duration,
}

impl StrategyReport {
    /// Render the report as aligned text lines
    pub fn render(&self) -> String {
        let stats = &self.statistics;
        format!(
            "{:<14} mean = {:.6}  stddev = {:.6}  95% CI = [{:.6}, {:.6}]  time = {:.3?}",
            self.kind.name(),
            stats.mean,
            stats.std_dev,
            stats.confidence_low(),
            stats.confidence_high(),
            self.elapsed
        )
    }
}

/// Orchestrates experiments across strategies with progress tracking
pub struct ExperimentRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl ExperimentRunner {
    /// Create a new runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run every selected strategy and collect the reports
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation or any trial fails
    pub fn run(&mut self) -> Result<Vec<StrategyReport>> {
        let config = self.cli.config();
        config.validate()?;
        let strategies = self.cli.strategies();

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(strategies.len(), config.trials);
        }

        let mut reports = Vec::with_capacity(strategies.len());
        for (index, kind) in strategies.into_iter().enumerate() {
            reports.push(self.run_strategy(config, kind, index)?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(reports)
    }

    /// Run the experiments and print one line per strategy
    ///
    /// # Errors
    ///
    /// Returns an error if any experiment fails
    // Printing the summary is the purpose of the binary
    #[allow(clippy::print_stdout)]
    pub fn process(&mut self) -> Result<()> {
        let reports = self.run()?;
        println!(
            "{} trials on a {n}x{n} grid (seed {})",
            self.cli.trials,
            self.cli.seed,
            n = self.cli.size
        );
        for report in &reports {
            println!("{}", report.render());
        }
        Ok(())
    }

    fn run_strategy(
        &self,
        config: ExperimentConfig,
        kind: StrategyKind,
        index: usize,
    ) -> Result<StrategyReport> {
        let start_time = Instant::now();
        let mut experiment = Experiment::new(config, kind)?;

        if let Some(ref pm) = self.progress_manager {
            pm.start_strategy(index, kind.name());
        }

        while !experiment.is_finished() {
            let threshold = experiment.run_next()?;
            if let Some(ref pm) = self.progress_manager {
                pm.update_trial(index, experiment.completed(), threshold);
            }
        }

        let elapsed = start_time.elapsed();
        if let Some(ref pm) = self.progress_manager {
            pm.complete_strategy(index, elapsed);
        }

        Ok(StrategyReport {
            kind,
            statistics: experiment.statistics()?,
            elapsed,
        })
    }
}
