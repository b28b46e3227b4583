/// Depth-first and breadth-first flood-fill strategies
pub mod flood;
/// Percolation facade shared by every strategy
pub mod percolation;
/// Strategy capability and runtime strategy selection
pub mod strategy;
/// Union-find strategy with virtual top and bottom nodes
pub mod union_fill;
/// Disjoint-set structures with interchangeable implementations
pub mod union_find;
