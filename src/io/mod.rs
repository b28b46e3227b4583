//! Input/output, configuration and error handling

/// Command-line parsing and experiment orchestration
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error type shared across the crate
pub mod error;
/// Progress bars for long-running experiments
pub mod progress;
