//! Tests for command-line parsing and experiment orchestration

#[cfg(test)]
mod tests {
    use clap::Parser;
    use percolate::StrategyKind;
    use percolate::io::cli::{Cli, ExperimentRunner};
    use percolate::io::configuration::{DEFAULT_GRID_SIZE, DEFAULT_SEED, DEFAULT_TRIALS};

    // Tests defaults come from the configuration constants
    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["percolate"]).unwrap();
        assert_eq!(cli.size, DEFAULT_GRID_SIZE);
        assert_eq!(cli.trials, DEFAULT_TRIALS);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.strategies(), vec![StrategyKind::UnionFind]);
        assert!(cli.should_show_progress());
    }

    // Tests comma separated strategies are parsed in order without duplicates
    #[test]
    fn test_strategy_list() {
        let cli = Cli::try_parse_from(["percolate", "--strategy", "bfs,dfs,bfs", "-q"]).unwrap();
        assert_eq!(cli.strategies(), vec![StrategyKind::Bfs, StrategyKind::Dfs]);
        assert!(!cli.should_show_progress());
    }

    // Tests --all selects every strategy
    #[test]
    fn test_all_flag() {
        let cli = Cli::try_parse_from(["percolate", "--all"]).unwrap();
        assert_eq!(cli.strategies(), StrategyKind::ALL.to_vec());
    }

    // Tests unknown strategy names are rejected by the parser
    #[test]
    fn test_unknown_strategy_rejected() {
        assert!(Cli::try_parse_from(["percolate", "-k", "flood"]).is_err());
    }

    // Tests the runner produces one report per strategy
    #[test]
    fn test_runner_reports() {
        let cli = Cli::try_parse_from([
            "percolate", "-n", "8", "-t", "3", "-k", "dfs-recompute,quick-find", "-q",
        ])
        .unwrap();
        let reports = ExperimentRunner::new(cli).run().unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].kind, StrategyKind::DfsRecompute);
        assert_eq!(reports[1].kind, StrategyKind::QuickFind);
        assert_eq!(reports[0].statistics, reports[1].statistics);
        assert!(reports[1].render().starts_with("quick-find"));
    }

    // Tests invalid parameters fail before any trial runs
    #[test]
    fn test_runner_validates() {
        let cli = Cli::try_parse_from(["percolate", "-t", "0", "-q"]).unwrap();
        assert!(ExperimentRunner::new(cli).run().is_err());
    }
}
