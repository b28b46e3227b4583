//! Summary statistics for percolation threshold estimates

use num_traits::{Float, FromPrimitive};

use crate::io::configuration::CONFIDENCE_Z;
use crate::io::error::{Result, invalid_parameter};

/// Arithmetic mean, or `None` for an empty sample
pub fn mean<T: Float + FromPrimitive>(samples: &[T]) -> Option<T> {
    let count = T::from_usize(samples.len()).filter(|count| !count.is_zero())?;
    let sum = samples.iter().fold(T::zero(), |acc, &value| acc + value);
    Some(sum / count)
}

/// Sample standard deviation (Bessel-corrected)
///
/// A single sample has no spread and yields zero.
pub fn sample_std_dev<T: Float + FromPrimitive>(samples: &[T]) -> Option<T> {
    let center = mean(samples)?;
    if samples.len() < 2 {
        return Some(T::zero());
    }

    let squares = samples
        .iter()
        .fold(T::zero(), |acc, &value| acc + (value - center).powi(2));
    let degrees = T::from_usize(samples.len() - 1)?;
    Some((squares / degrees).sqrt())
}

/// Threshold estimate aggregated over independent trials
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdStatistics {
    /// Number of trials aggregated
    pub trials: usize,
    /// Mean open-site fraction at the moment of percolation
    pub mean: f64,
    /// Sample standard deviation of the fractions
    pub std_dev: f64,
}

impl ThresholdStatistics {
    /// Aggregate per-trial thresholds
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `thresholds` is empty
    pub fn from_samples(thresholds: &[f64]) -> Result<Self> {
        let (Some(mean), Some(std_dev)) = (mean(thresholds), sample_std_dev(thresholds)) else {
            return Err(invalid_parameter(
                "thresholds",
                &thresholds.len(),
                &"at least one trial is required",
            ));
        };

        Ok(Self {
            trials: thresholds.len(),
            mean,
            std_dev,
        })
    }

    /// Half-width of the 95% confidence interval
    pub fn margin(&self) -> f64 {
        CONFIDENCE_Z * self.std_dev / (self.trials as f64).sqrt()
    }

    /// Lower bound of the 95% confidence interval
    pub fn confidence_low(&self) -> f64 {
        self.mean - self.margin()
    }

    /// Upper bound of the 95% confidence interval
    pub fn confidence_high(&self) -> f64 {
        self.mean + self.margin()
    }
}
