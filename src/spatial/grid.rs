//! Site grid shared by every connectivity strategy
//!
//! Stores one state per site in a square `ndarray` matrix. Row 0 is the top
//! of the system and row `size - 1` the bottom. Public coordinates are signed
//! so that callers can pass negative values and receive a bounds error.

use ndarray::Array2;

use crate::io::error::{PercolationError, Result, out_of_range};

/// Row/column offsets of the four orthogonal neighbours (up, down, left, right)
const NEIGHBOR_OFFSETS: [[isize; 2]; 4] = [[-1, 0], [1, 0], [0, -1], [0, 1]];

/// State of a single site
///
/// Sites only move forward through `Blocked -> Open -> Full`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Site {
    /// Not yet opened
    #[default]
    Blocked,
    /// Opened but not known to be connected to the top row
    Open,
    /// Opened and connected to the top row through open sites
    Full,
}

impl Site {
    /// Test whether the site has been opened
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open | Self::Full)
    }

    /// Test whether the site is marked full
    pub const fn is_full(self) -> bool {
        matches!(self, Self::Full)
    }
}

/// Square matrix of site states
#[derive(Debug, Clone)]
pub struct SiteGrid {
    sites: Array2<Site>,
    size: usize,
}

impl SiteGrid {
    /// Create a grid with every site blocked
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` if `size` is zero
    pub fn new(size: usize) -> Result<Self> {
        if size < 1 {
            return Err(PercolationError::InvalidSize { size });
        }

        Ok(Self {
            sites: Array2::default((size, size)),
            size,
        })
    }

    /// Get the grid dimension
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Convert a signed coordinate into grid indices
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if either coordinate lies outside `0..size`
    pub fn locate(&self, row: i32, col: i32) -> Result<[usize; 2]> {
        let in_range = |value: i32| usize::try_from(value).ok().filter(|&v| v < self.size);

        match (in_range(row), in_range(col)) {
            (Some(r), Some(c)) => Ok([r, c]),
            _ => Err(out_of_range(row.into(), col.into(), self.size)),
        }
    }

    /// Check that already-unsigned indices lie inside the grid
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if either index is not below `size`
    pub fn check(&self, pos: [usize; 2]) -> Result<()> {
        if pos[0] < self.size && pos[1] < self.size {
            Ok(())
        } else {
            // Only indices past i64::MAX saturate
            let signed = |value: usize| i64::try_from(value).unwrap_or(i64::MAX);
            Err(out_of_range(signed(pos[0]), signed(pos[1]), self.size))
        }
    }

    /// Get the state of the site at `pos`
    ///
    /// Positions outside the grid read as blocked.
    pub fn site(&self, pos: [usize; 2]) -> Site {
        self.sites.get(pos).copied().unwrap_or_default()
    }

    /// Overwrite the state of the site at `pos`
    pub fn set(&mut self, pos: [usize; 2], site: Site) {
        if let Some(slot) = self.sites.get_mut(pos) {
            *slot = site;
        }
    }

    /// Test whether the site at `pos` is open
    pub fn is_open(&self, pos: [usize; 2]) -> bool {
        self.site(pos).is_open()
    }

    /// Test whether the site at `pos` is full
    pub fn is_full(&self, pos: [usize; 2]) -> bool {
        self.site(pos).is_full()
    }

    /// Iterate over the in-bounds orthogonal neighbours of `pos`
    pub fn neighbors(&self, pos: [usize; 2]) -> impl Iterator<Item = [usize; 2]> + use<> {
        let size = self.size;
        NEIGHBOR_OFFSETS.into_iter().filter_map(move |[dr, dc]| {
            let row = pos[0].checked_add_signed(dr).filter(|&r| r < size)?;
            let col = pos[1].checked_add_signed(dc).filter(|&c| c < size)?;
            Some([row, col])
        })
    }

    /// Demote every full site back to open
    ///
    /// Only used by strategies that rebuild the full marking from scratch.
    pub fn clear_full(&mut self) {
        self.sites.mapv_inplace(|site| match site {
            Site::Full => Site::Open,
            other => other,
        });
    }

    /// Test whether any site in the bottom row is full
    pub fn bottom_row_full(&self) -> bool {
        let bottom = self.size - 1;
        (0..self.size).any(|col| self.is_full([bottom, col]))
    }

    /// Count sites in the given state
    pub fn count(&self, state: Site) -> usize {
        self.sites.iter().filter(|&&site| site == state).count()
    }

    /// Flatten a position into a disjoint-set element id (`row * size + col`)
    pub const fn element(&self, pos: [usize; 2]) -> usize {
        pos[0] * self.size + pos[1]
    }
}
