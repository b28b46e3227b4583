//! Disjoint-set structures backing the union-find connectivity strategy
//!
//! The strategy takes its structure as an injected `DisjointSet` so that
//! different implementations can be benchmarked against each other.

use std::cell::Cell;

use crate::io::error::{PercolationError, Result};

/// Partition of the elements `0..len` into disjoint sets
pub trait DisjointSet {
    /// Reset to `len` singleton sets
    fn initialize(&mut self, len: usize);

    /// Number of elements in the universe (zero before `initialize`)
    fn len(&self) -> usize;

    /// Test whether the universe is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of disjoint sets currently tracked
    fn count(&self) -> usize;

    /// Merge the sets containing `a` and `b`
    ///
    /// No-op when the two elements are already connected.
    ///
    /// # Errors
    ///
    /// Returns `Uninitialized` before `initialize` and `ElementOutOfRange`
    /// if either element is not below `len`
    fn union(&mut self, a: usize, b: usize) -> Result<()>;

    /// Test whether `a` and `b` belong to the same set
    ///
    /// # Errors
    ///
    /// Returns `Uninitialized` before `initialize` and `ElementOutOfRange`
    /// if either element is not below `len`
    fn connected(&self, a: usize, b: usize) -> Result<bool>;
}

/// Check both elements against the universe before touching any state
fn check_pair(len: Option<usize>, a: usize, b: usize) -> Result<()> {
    let len = len.ok_or(PercolationError::Uninitialized)?;
    for element in [a, b] {
        if element >= len {
            return Err(PercolationError::ElementOutOfRange { element, len });
        }
    }
    Ok(())
}

/// Parent links and tree sizes of an initialized weighted forest
///
/// Parents sit in `Cell`s so read-only queries can still halve the paths
/// they walk.
#[derive(Debug, Clone)]
struct Forest {
    parents: Vec<Cell<usize>>,
    sizes: Vec<usize>,
}

impl Forest {
    fn new(len: usize) -> Self {
        Self {
            parents: (0..len).map(Cell::new).collect(),
            sizes: vec![1; len],
        }
    }

    fn parent(&self, element: usize) -> usize {
        self.parents.get(element).map_or(element, Cell::get)
    }

    fn find(&self, mut element: usize) -> usize {
        loop {
            let parent = self.parent(element);
            if parent == element {
                return element;
            }
            let grandparent = self.parent(parent);
            if let Some(link) = self.parents.get(element) {
                link.set(grandparent);
            }
            element = grandparent;
        }
    }

    fn depth(&self, mut element: usize) -> usize {
        let mut depth = 0;
        loop {
            let parent = self.parent(element);
            if parent == element {
                return depth;
            }
            depth += 1;
            element = parent;
        }
    }
}

/// Weighted quick-union with path compression
///
/// Smaller trees are always attached under larger ones, which bounds tree
/// height by `log2(len)`. Every root lookup, whether from `union` or
/// `connected`, halves the path it walks, so the amortized cost per
/// operation is near constant.
#[derive(Debug, Clone, Default)]
pub struct WeightedQuickUnion {
    forest: Option<Forest>,
    components: usize,
}

impl WeightedQuickUnion {
    /// Create an uninitialized structure
    pub const fn new() -> Self {
        Self {
            forest: None,
            components: 0,
        }
    }

    /// Create a structure already initialized with `len` singletons
    pub fn with_len(len: usize) -> Self {
        let mut set = Self::new();
        set.initialize(len);
        set
    }

    /// Number of parent links between `element` and its root
    ///
    /// Does not compress. Returns `None` before `initialize` or for an
    /// element outside the universe.
    pub fn depth(&self, element: usize) -> Option<usize> {
        let forest = self.forest.as_ref()?;
        (element < forest.parents.len()).then(|| forest.depth(element))
    }
}

impl DisjointSet for WeightedQuickUnion {
    fn initialize(&mut self, len: usize) {
        self.forest = Some(Forest::new(len));
        self.components = len;
    }

    fn len(&self) -> usize {
        self.forest.as_ref().map_or(0, |forest| forest.parents.len())
    }

    fn count(&self) -> usize {
        self.components
    }

    fn union(&mut self, a: usize, b: usize) -> Result<()> {
        check_pair(self.forest.as_ref().map(|forest| forest.parents.len()), a, b)?;
        let Some(forest) = self.forest.as_mut() else {
            return Err(PercolationError::Uninitialized);
        };

        let root_a = forest.find(a);
        let root_b = forest.find(b);
        if root_a == root_b {
            return Ok(());
        }

        let size_a = forest.sizes.get(root_a).copied().unwrap_or(1);
        let size_b = forest.sizes.get(root_b).copied().unwrap_or(1);
        let (large, small) = if size_a >= size_b {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };

        if let Some(link) = forest.parents.get(small) {
            link.set(large);
        }
        if let Some(size) = forest.sizes.get_mut(large) {
            *size = size_a + size_b;
        }
        self.components -= 1;
        Ok(())
    }

    fn connected(&self, a: usize, b: usize) -> Result<bool> {
        check_pair(self.forest.as_ref().map(|forest| forest.parents.len()), a, b)?;
        let Some(forest) = self.forest.as_ref() else {
            return Err(PercolationError::Uninitialized);
        };
        Ok(forest.find(a) == forest.find(b))
    }
}

/// Quick-find: every element stores its component id directly
///
/// `connected` is a single comparison while `union` relabels the whole
/// universe, so this only suits small grids and comparison benchmarks.
#[derive(Debug, Clone, Default)]
pub struct QuickFind {
    ids: Option<Vec<usize>>,
    components: usize,
}

impl QuickFind {
    /// Create an uninitialized structure
    pub const fn new() -> Self {
        Self {
            ids: None,
            components: 0,
        }
    }

    /// Look up the component ids of both elements
    fn component_ids(&self, a: usize, b: usize) -> Result<(usize, usize)> {
        let ids = self.ids.as_deref().ok_or(PercolationError::Uninitialized)?;
        let id_of = |element: usize| {
            ids.get(element)
                .copied()
                .ok_or(PercolationError::ElementOutOfRange {
                    element,
                    len: ids.len(),
                })
        };
        Ok((id_of(a)?, id_of(b)?))
    }
}

impl DisjointSet for QuickFind {
    fn initialize(&mut self, len: usize) {
        self.ids = Some((0..len).collect());
        self.components = len;
    }

    fn len(&self) -> usize {
        self.ids.as_ref().map_or(0, Vec::len)
    }

    fn count(&self) -> usize {
        self.components
    }

    fn union(&mut self, a: usize, b: usize) -> Result<()> {
        let (from, to) = self.component_ids(a, b)?;
        if from == to {
            return Ok(());
        }

        for id in self.ids.iter_mut().flatten().filter(|id| **id == from) {
            *id = to;
        }
        self.components -= 1;
        Ok(())
    }

    fn connected(&self, a: usize, b: usize) -> Result<bool> {
        let (id_a, id_b) = self.component_ids(a, b)?;
        Ok(id_a == id_b)
    }
}
