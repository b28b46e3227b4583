//! Spatial data structures
//!
//! Holds the square site grid that every connectivity strategy reads and marks.

/// Site grid state and neighbour iteration
pub mod grid;

pub use grid::{Site, SiteGrid};
