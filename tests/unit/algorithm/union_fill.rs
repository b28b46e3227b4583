//! Tests for the union-find strategy and its virtual nodes

#[cfg(test)]
mod tests {
    use percolate::algorithm::union_fill::UnionFindFill;
    use percolate::spatial::SiteGrid;
    use percolate::{
        DisjointSet, FillStrategy, Percolate, Percolation, QuickFind, WeightedQuickUnion,
    };

    // Tests virtual nodes sit just past the site elements
    #[test]
    fn test_virtual_node_ids() {
        let system = Percolation::union_find(WeightedQuickUnion::new(), 4).unwrap();
        let strategy = system.strategy();
        assert_eq!(strategy.virtual_top(), 16);
        assert_eq!(strategy.virtual_bottom(), 17);
        assert_eq!(strategy.disjoint_set().len(), 18);
    }

    // Tests an injected structure is re-initialized to the grid universe
    #[test]
    fn test_injected_set_reinitialized() {
        let mut set = QuickFind::new();
        set.initialize(3);
        set.union(0, 1).unwrap();

        let system = Percolation::union_find(set, 2).unwrap();
        let inner = system.strategy().disjoint_set();
        assert_eq!(inner.len(), 6);
        assert_eq!(inner.count(), 6);
    }

    // Tests opening top and bottom sites joins them to the virtual nodes
    #[test]
    fn test_edge_rows_join_virtual_nodes() {
        let mut system = Percolation::union_find(WeightedQuickUnion::new(), 3).unwrap();
        system.open(0, 2).unwrap();
        system.open(2, 0).unwrap();

        let strategy = system.strategy();
        let set = strategy.disjoint_set();
        assert_eq!(set.connected(2, strategy.virtual_top()), Ok(true));
        assert_eq!(set.connected(6, strategy.virtual_bottom()), Ok(true));
        assert_eq!(
            set.connected(strategy.virtual_top(), strategy.virtual_bottom()),
            Ok(false)
        );
    }

    // Tests a blocked top-row site never reads as full
    #[test]
    fn test_blocked_top_site_not_full() {
        let mut system = Percolation::with_strategy(2, UnionFindFill::new(QuickFind::new())).unwrap();
        assert!(!system.is_full(0, 0).unwrap());
        system.open(0, 1).unwrap();
        assert!(!system.is_full(0, 0).unwrap());
        assert!(system.is_full(0, 1).unwrap());
    }

    // Tests a full column percolates on both disjoint-set implementations
    #[test]
    fn test_column_percolates() {
        let mut weighted = Percolation::union_find(WeightedQuickUnion::new(), 5).unwrap();
        let mut quick = Percolation::union_find(QuickFind::new(), 5).unwrap();
        for row in 0..5 {
            weighted.open(row, 3).unwrap();
            quick.open(row, 3).unwrap();
        }
        assert!(weighted.percolates());
        assert!(quick.percolates());
        assert!(weighted.is_full(4, 3).unwrap());
    }

    // Tests querying a strategy whose set was never initialized fails loudly
    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "union-find query")]
    fn test_uninitialized_query_asserts() {
        let grid = SiteGrid::new(2).unwrap();
        let strategy = UnionFindFill::new(WeightedQuickUnion::new());
        assert!(!strategy.percolates(&grid));
    }

    // Tests the same query after initialization answers normally
    #[test]
    fn test_initialized_query_answers() {
        let grid = SiteGrid::new(2).unwrap();
        let mut strategy = UnionFindFill::new(WeightedQuickUnion::new());
        strategy.initialize(2);
        assert!(!strategy.percolates(&grid));
        assert!(!strategy.is_full(&grid, [0, 0]));
    }
}
