//! Flood-fill connectivity strategies
//!
//! Full sites are stored directly in the grid. Filling is a transitive
//! closure over "open and orthogonally adjacent", seeded either at the top
//! row or at an already full neighbour. The depth-first and breadth-first
//! fills visit sites in different orders but always produce the same marking.

use std::collections::VecDeque;

use crate::algorithm::strategy::FillStrategy;
use crate::io::error::Result;
use crate::spatial::{Site, SiteGrid};

/// Test whether a newly opened site must join the full region
///
/// True on the top row or when any orthogonal neighbour is already full.
pub fn should_fill(grid: &SiteGrid, pos: [usize; 2]) -> bool {
    pos[0] == 0 || grid.neighbors(pos).any(|neighbor| grid.is_full(neighbor))
}

/// Mark every open site reachable from `start` as full, depth first
///
/// Uses an explicit stack so traversal depth never grows the call stack.
/// Does nothing when `start` is blocked or already full. Returns the number
/// of sites newly marked.
///
/// # Errors
///
/// Returns `IndexOutOfRange` if `start` lies outside the grid
pub fn depth_first_fill(grid: &mut SiteGrid, start: [usize; 2]) -> Result<usize> {
    grid.check(start)?;
    if grid.site(start) != Site::Open {
        return Ok(0);
    }

    grid.set(start, Site::Full);
    let mut filled = 1;
    let mut stack = vec![start];

    while let Some(pos) = stack.pop() {
        for neighbor in grid.neighbors(pos) {
            if grid.site(neighbor) == Site::Open {
                grid.set(neighbor, Site::Full);
                filled += 1;
                stack.push(neighbor);
            }
        }
    }

    Ok(filled)
}

/// Mark every open site reachable from `start` as full, breadth first
///
/// Same contract and result as [`depth_first_fill`], using a FIFO frontier.
///
/// # Errors
///
/// Returns `IndexOutOfRange` if `start` lies outside the grid
pub fn breadth_first_fill(grid: &mut SiteGrid, start: [usize; 2]) -> Result<usize> {
    grid.check(start)?;
    if grid.site(start) != Site::Open {
        return Ok(0);
    }

    grid.set(start, Site::Full);
    let mut filled = 1;
    let mut frontier = VecDeque::from([start]);

    while let Some(pos) = frontier.pop_front() {
        for neighbor in grid.neighbors(pos) {
            if grid.site(neighbor) == Site::Open {
                grid.set(neighbor, Site::Full);
                filled += 1;
                frontier.push_back(neighbor);
            }
        }
    }

    Ok(filled)
}

/// Baseline that rebuilds the whole full marking after every open
///
/// O(N²) per open; kept as the correctness reference for the faster variants.
#[derive(Debug, Clone, Copy, Default)]
pub struct DfsRecompute;

impl FillStrategy for DfsRecompute {
    fn on_open(&mut self, grid: &mut SiteGrid, pos: [usize; 2]) -> Result<()> {
        grid.check(pos)?;
        grid.clear_full();
        for col in 0..grid.size() {
            depth_first_fill(grid, [0, col])?;
        }
        Ok(())
    }

    fn is_full(&self, grid: &SiteGrid, pos: [usize; 2]) -> bool {
        grid.is_full(pos)
    }

    fn percolates(&self, grid: &SiteGrid) -> bool {
        grid.bottom_row_full()
    }
}

/// Incremental depth-first fill from each newly opened site
#[derive(Debug, Clone, Copy, Default)]
pub struct DfsIncremental;

impl FillStrategy for DfsIncremental {
    fn on_open(&mut self, grid: &mut SiteGrid, pos: [usize; 2]) -> Result<()> {
        grid.check(pos)?;
        if should_fill(grid, pos) {
            depth_first_fill(grid, pos)?;
        }
        Ok(())
    }

    fn is_full(&self, grid: &SiteGrid, pos: [usize; 2]) -> bool {
        grid.is_full(pos)
    }

    fn percolates(&self, grid: &SiteGrid) -> bool {
        grid.bottom_row_full()
    }
}

/// Incremental breadth-first fill from each newly opened site
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsIncremental;

impl FillStrategy for BfsIncremental {
    fn on_open(&mut self, grid: &mut SiteGrid, pos: [usize; 2]) -> Result<()> {
        grid.check(pos)?;
        if should_fill(grid, pos) {
            breadth_first_fill(grid, pos)?;
        }
        Ok(())
    }

    fn is_full(&self, grid: &SiteGrid, pos: [usize; 2]) -> bool {
        grid.is_full(pos)
    }

    fn percolates(&self, grid: &SiteGrid) -> bool {
        grid.bottom_row_full()
    }
}
