//! Percolation facade shared by every connectivity strategy
//!
//! Owns the site grid, validates coordinates and counts opened sites exactly
//! once, then delegates connectivity to the strategy chosen at construction.

use crate::algorithm::flood::{BfsIncremental, DfsIncremental, DfsRecompute};
use crate::algorithm::strategy::FillStrategy;
use crate::algorithm::union_fill::UnionFindFill;
use crate::algorithm::union_find::DisjointSet;
use crate::io::error::Result;
use crate::spatial::{Site, SiteGrid};

/// Object-safe view of a percolation system
///
/// Lets experiment drivers hold any strategy behind one type.
pub trait Percolate {
    /// Open the site at (`row`, `col`); re-opening is a no-op
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if the coordinate lies outside the grid
    fn open(&mut self, row: i32, col: i32) -> Result<()>;

    /// Test whether the site at (`row`, `col`) is open
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if the coordinate lies outside the grid
    fn is_open(&self, row: i32, col: i32) -> Result<bool>;

    /// Test whether the site at (`row`, `col`) is connected to the top row
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if the coordinate lies outside the grid
    fn is_full(&self, row: i32, col: i32) -> Result<bool>;

    /// Test whether an open path joins the top row to the bottom row
    fn percolates(&self) -> bool;

    /// Number of distinct sites opened so far
    fn number_of_open_sites(&self) -> usize;

    /// Grid dimension
    fn size(&self) -> usize;
}

/// Grid plus one connectivity strategy
#[derive(Debug, Clone)]
pub struct Percolation<S> {
    grid: SiteGrid,
    strategy: S,
    open_sites: usize,
}

impl<S: FillStrategy> Percolation<S> {
    /// Create a `size` x `size` system with every site blocked
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` if `size` is zero
    pub fn with_strategy(size: usize, mut strategy: S) -> Result<Self> {
        let grid = SiteGrid::new(size)?;
        strategy.initialize(size);

        Ok(Self {
            grid,
            strategy,
            open_sites: 0,
        })
    }

    /// Read-only view of the site grid
    pub const fn grid(&self) -> &SiteGrid {
        &self.grid
    }

    /// Access the active strategy
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }
}

impl Percolation<DfsRecompute> {
    /// Create a system that recomputes the full marking on every open
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` if `size` is zero
    pub fn dfs_recompute(size: usize) -> Result<Self> {
        Self::with_strategy(size, DfsRecompute)
    }
}

impl Percolation<DfsIncremental> {
    /// Create a system using incremental depth-first filling
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` if `size` is zero
    pub fn dfs_incremental(size: usize) -> Result<Self> {
        Self::with_strategy(size, DfsIncremental)
    }
}

impl Percolation<BfsIncremental> {
    /// Create a system using incremental breadth-first filling
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` if `size` is zero
    pub fn bfs_incremental(size: usize) -> Result<Self> {
        Self::with_strategy(size, BfsIncremental)
    }
}

impl<D: DisjointSet> Percolation<UnionFindFill<D>> {
    /// Create a system tracking connectivity in the given disjoint-set structure
    ///
    /// The structure is (re)initialized with `size * size + 2` elements.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` if `size` is zero
    pub fn union_find(set: D, size: usize) -> Result<Self> {
        Self::with_strategy(size, UnionFindFill::new(set))
    }
}

impl<S: FillStrategy> Percolate for Percolation<S> {
    fn open(&mut self, row: i32, col: i32) -> Result<()> {
        let pos = self.grid.locate(row, col)?;
        if self.grid.is_open(pos) {
            return Ok(());
        }

        self.grid.set(pos, Site::Open);
        self.open_sites += 1;
        self.strategy.on_open(&mut self.grid, pos)
    }

    fn is_open(&self, row: i32, col: i32) -> Result<bool> {
        let pos = self.grid.locate(row, col)?;
        Ok(self.grid.is_open(pos))
    }

    fn is_full(&self, row: i32, col: i32) -> Result<bool> {
        let pos = self.grid.locate(row, col)?;
        Ok(self.strategy.is_full(&self.grid, pos))
    }

    fn percolates(&self) -> bool {
        self.strategy.percolates(&self.grid)
    }

    fn number_of_open_sites(&self) -> usize {
        self.open_sites
    }

    fn size(&self) -> usize {
        self.grid.size()
    }
}
