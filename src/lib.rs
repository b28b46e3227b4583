//! Percolation on an N x N grid with interchangeable connectivity strategies
//!
//! Sites are opened one at a time and the system reports whether an open
//! path joins the top row to the bottom row. Connectivity is tracked by a
//! pluggable strategy: depth-first or breadth-first flood fill, or union-find
//! over an injected disjoint-set structure.

#![forbid(unsafe_code)]

/// Connectivity strategies, disjoint sets and the percolation facade
pub mod algorithm;
/// Threshold estimation experiments and statistics
pub mod analysis;
/// Command-line interface, configuration and error handling
pub mod io;
/// Site grid state
pub mod spatial;

pub use algorithm::percolation::{Percolate, Percolation};
pub use algorithm::strategy::{FillStrategy, StrategyKind};
pub use algorithm::union_find::{DisjointSet, QuickFind, WeightedQuickUnion};
pub use io::error::{PercolationError, Result};
