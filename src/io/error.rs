//! Error types shared by the grid, the connectivity strategies and the experiment driver

use std::fmt;

/// Main error type for all percolation operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PercolationError {
    /// Site coordinate lies outside the grid
    IndexOutOfRange {
        /// Requested row
        row: i64,
        /// Requested column
        col: i64,
        /// Grid dimension; valid coordinates are `0..size`
        size: usize,
    },

    /// Disjoint-set element lies outside the initialized universe
    ElementOutOfRange {
        /// Requested element id
        element: usize,
        /// Number of elements in the structure
        len: usize,
    },

    /// Disjoint-set structure queried before `initialize`
    Uninitialized,

    /// Grid constructed with a dimension below one
    InvalidSize {
        /// Rejected dimension
        size: usize,
    },

    /// Experiment parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for PercolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { row, col, size } => {
                write!(f, "({row},{col}) not in bounds of {size}x{size} grid")
            }
            Self::ElementOutOfRange { element, len } => {
                write!(f, "Element {element} is out of range (len: {len})")
            }
            Self::Uninitialized => {
                write!(f, "Disjoint set used before initialize")
            }
            Self::InvalidSize { size } => {
                write!(f, "Grid size must be at least 1, got {size}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for PercolationError {}

/// Convenience type alias for percolation results
pub type Result<T> = std::result::Result<T, PercolationError>;

/// Create an out-of-range error for a site coordinate
pub const fn out_of_range(row: i64, col: i64, size: usize) -> PercolationError {
    PercolationError::IndexOutOfRange { row, col, size }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PercolationError {
    PercolationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
