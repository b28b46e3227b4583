//! Experiment constants and runtime configuration defaults

// Default values for configurable parameters
/// Default grid dimension for threshold experiments
pub const DEFAULT_GRID_SIZE: usize = 100;

/// Default number of independent trials per strategy
pub const DEFAULT_TRIALS: usize = 50;

/// Fixed seed for reproducible experiments
pub const DEFAULT_SEED: u64 = 42;

// The recompute baseline is O(N^4) per trial, so larger grids are impractical
/// Maximum allowed grid dimension
pub const MAX_GRID_SIZE: usize = 4_096;

/// Two-sided z-score for the 95% confidence interval
pub const CONFIDENCE_Z: f64 = 1.96;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
