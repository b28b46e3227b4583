//! Union-find connectivity with virtual top and bottom nodes
//!
//! Sites map to elements `row * size + col`. Two extra elements stand for the
//! whole top row and the whole bottom row, so percolation is a single
//! connectivity query instead of a scan.

use crate::algorithm::strategy::FillStrategy;
use crate::algorithm::union_find::DisjointSet;
use crate::io::error::Result;
use crate::spatial::SiteGrid;

/// Connectivity strategy over an injected disjoint-set structure
#[derive(Debug, Clone)]
pub struct UnionFindFill<D> {
    set: D,
    virtual_top: usize,
    virtual_bottom: usize,
}

impl<D: DisjointSet> UnionFindFill<D> {
    /// Wrap a disjoint-set structure; it is re-initialized by the facade
    pub const fn new(set: D) -> Self {
        Self {
            set,
            virtual_top: 0,
            virtual_bottom: 0,
        }
    }

    /// Element id standing for the top row
    pub const fn virtual_top(&self) -> usize {
        self.virtual_top
    }

    /// Element id standing for the bottom row
    pub const fn virtual_bottom(&self) -> usize {
        self.virtual_bottom
    }

    /// Access the underlying disjoint-set structure
    pub const fn disjoint_set(&self) -> &D {
        &self.set
    }

    // The facade initializes the set and checks positions before querying,
    // so an error here means the strategy was driven without it
    fn linked(&self, a: usize, b: usize) -> bool {
        let connected = self.set.connected(a, b);
        debug_assert!(
            connected.is_ok(),
            "union-find query ({a}, {b}) failed: {connected:?}"
        );
        connected.unwrap_or(false)
    }
}

impl<D: DisjointSet> FillStrategy for UnionFindFill<D> {
    fn initialize(&mut self, size: usize) {
        let sites = size * size;
        self.set.initialize(sites + 2);
        self.virtual_top = sites;
        self.virtual_bottom = sites + 1;
    }

    fn on_open(&mut self, grid: &mut SiteGrid, pos: [usize; 2]) -> Result<()> {
        grid.check(pos)?;
        let element = grid.element(pos);

        if pos[0] == 0 {
            self.set.union(element, self.virtual_top)?;
        }
        if pos[0] + 1 == grid.size() {
            self.set.union(element, self.virtual_bottom)?;
        }

        for neighbor in grid.neighbors(pos) {
            if grid.is_open(neighbor) {
                self.set.union(element, grid.element(neighbor))?;
            }
        }

        Ok(())
    }

    fn is_full(&self, grid: &SiteGrid, pos: [usize; 2]) -> bool {
        grid.is_open(pos) && self.linked(grid.element(pos), self.virtual_top)
    }

    fn percolates(&self, _grid: &SiteGrid) -> bool {
        self.linked(self.virtual_top, self.virtual_bottom)
    }
}
