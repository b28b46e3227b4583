//! Pluggable connectivity strategies
//!
//! A strategy decides which open sites are connected to the top row. The
//! facade owns the grid and hands it to the strategy after every new open.

use crate::algorithm::percolation::{Percolate, Percolation};
use crate::algorithm::union_find::{QuickFind, WeightedQuickUnion};
use crate::io::error::Result;
use crate::spatial::SiteGrid;

/// Connectivity tracking behind the percolation facade
pub trait FillStrategy {
    /// Prepare internal state for a `size` x `size` grid
    ///
    /// Called once by the facade before any site is opened.
    fn initialize(&mut self, _size: usize) {}

    /// React to the site at `pos` having just been opened
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `pos` lies outside the grid
    fn on_open(&mut self, grid: &mut SiteGrid, pos: [usize; 2]) -> Result<()>;

    /// Test whether the site at `pos` is connected to the top row
    fn is_full(&self, grid: &SiteGrid, pos: [usize; 2]) -> bool;

    /// Test whether the top row is connected to the bottom row
    fn percolates(&self, grid: &SiteGrid) -> bool;
}

/// Runtime selector over every shipped strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum StrategyKind {
    /// Depth-first fill recomputed over the whole grid on every open
    DfsRecompute,
    /// Incremental depth-first fill
    Dfs,
    /// Incremental breadth-first fill
    Bfs,
    /// Union-find over weighted quick-union with path compression
    UnionFind,
    /// Union-find over quick-find
    QuickFind,
}

impl StrategyKind {
    /// Every strategy, slowest first
    pub const ALL: [Self; 5] = [
        Self::DfsRecompute,
        Self::Dfs,
        Self::Bfs,
        Self::QuickFind,
        Self::UnionFind,
    ];

    /// Short human-readable name
    pub const fn name(self) -> &'static str {
        match self {
            Self::DfsRecompute => "dfs-recompute",
            Self::Dfs => "dfs",
            Self::Bfs => "bfs",
            Self::UnionFind => "union-find",
            Self::QuickFind => "quick-find",
        }
    }

    /// Build a boxed facade running this strategy
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` if `size` is zero
    pub fn build(self, size: usize) -> Result<Box<dyn Percolate>> {
        let system: Box<dyn Percolate> = match self {
            Self::DfsRecompute => Box::new(Percolation::dfs_recompute(size)?),
            Self::Dfs => Box::new(Percolation::dfs_incremental(size)?),
            Self::Bfs => Box::new(Percolation::bfs_incremental(size)?),
            Self::UnionFind => Box::new(Percolation::union_find(WeightedQuickUnion::new(), size)?),
            Self::QuickFind => Box::new(Percolation::union_find(QuickFind::new(), size)?),
        };
        Ok(system)
    }
}
