//! Monte-Carlo trials estimating the percolation threshold
//!
//! Each trial opens sites in a uniformly shuffled order until the system
//! percolates and records the fraction of sites that were open at that point.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::percolation::Percolate;
use crate::algorithm::strategy::StrategyKind;
use crate::analysis::statistics::ThresholdStatistics;
use crate::io::configuration::MAX_GRID_SIZE;
use crate::io::error::{Result, invalid_parameter};

/// Parameters of one threshold experiment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperimentConfig {
    /// Grid dimension
    pub size: usize,
    /// Number of independent trials
    pub trials: usize,
    /// Seed for the trial order generator
    pub seed: u64,
}

impl ExperimentConfig {
    /// Validate the parameters against the supported ranges
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a size outside `1..=MAX_GRID_SIZE` or
    /// zero trials
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_GRID_SIZE).contains(&self.size) {
            return Err(invalid_parameter(
                "size",
                &self.size,
                &format!("must be between 1 and {MAX_GRID_SIZE}"),
            ));
        }
        if self.trials == 0 {
            return Err(invalid_parameter(
                "trials",
                &self.trials,
                &"at least one trial is required",
            ));
        }
        Ok(())
    }
}

/// Open shuffled sites until `system` percolates
///
/// Returns the fraction of sites open at the moment of percolation.
///
/// # Errors
///
/// Propagates errors from `open`; none occur for coordinates drawn from the grid
pub fn run_trial<R: Rng + ?Sized>(system: &mut dyn Percolate, rng: &mut R) -> Result<f64> {
    let size = system.size();
    let mut order: Vec<(i32, i32)> = (0..size)
        .flat_map(|row| (0..size).map(move |col| (row, col)))
        .filter_map(|(row, col)| Some((i32::try_from(row).ok()?, i32::try_from(col).ok()?)))
        .collect();
    order.shuffle(rng);

    for (row, col) in order {
        if system.percolates() {
            break;
        }
        system.open(row, col)?;
    }

    Ok(system.number_of_open_sites() as f64 / (size * size) as f64)
}

/// Runs trials for one strategy with a reproducible generator
pub struct Experiment {
    config: ExperimentConfig,
    kind: StrategyKind,
    rng: StdRng,
    thresholds: Vec<f64>,
}

impl Experiment {
    /// Create an experiment; every strategy seeded alike sees the same open orders
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration is out of range
    pub fn new(config: ExperimentConfig, kind: StrategyKind) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            kind,
            rng: StdRng::seed_from_u64(config.seed),
            thresholds: Vec::with_capacity(config.trials),
        })
    }

    /// Strategy under test
    pub const fn kind(&self) -> StrategyKind {
        self.kind
    }

    /// Trials completed so far
    pub fn completed(&self) -> usize {
        self.thresholds.len()
    }

    /// Test whether every configured trial has run
    pub fn is_finished(&self) -> bool {
        self.completed() >= self.config.trials
    }

    /// Run the next trial and return its threshold
    ///
    /// # Errors
    ///
    /// Propagates construction and open errors from the facade
    pub fn run_next(&mut self) -> Result<f64> {
        let mut system = self.kind.build(self.config.size)?;
        let threshold = run_trial(system.as_mut(), &mut self.rng)?;
        self.thresholds.push(threshold);
        Ok(threshold)
    }

    /// Run every remaining trial
    ///
    /// # Errors
    ///
    /// Propagates the first failing trial
    pub fn run_all(&mut self) -> Result<ThresholdStatistics> {
        while !self.is_finished() {
            self.run_next()?;
        }
        self.statistics()
    }

    /// Summarize the trials completed so far
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if no trial has run yet
    pub fn statistics(&self) -> Result<ThresholdStatistics> {
        ThresholdStatistics::from_samples(&self.thresholds)
    }
}
