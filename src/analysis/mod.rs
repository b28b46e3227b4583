//! Threshold experiments built on the public percolation interface

/// Seeded Monte-Carlo trials over any connectivity strategy
pub mod experiment;
/// Mean, spread and confidence interval of threshold estimates
pub mod statistics;
