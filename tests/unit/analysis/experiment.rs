//! Tests for seeded threshold trials

#[cfg(test)]
mod tests {
    use percolate::analysis::experiment::{Experiment, ExperimentConfig, run_trial};
    use percolate::{PercolationError, StrategyKind};
    use rand::{SeedableRng, rngs::StdRng};

    const CONFIG: ExperimentConfig = ExperimentConfig {
        size: 12,
        trials: 6,
        seed: 7,
    };

    // Tests a trial stops exactly when the system percolates
    #[test]
    fn test_trial_ends_at_percolation() {
        let mut system = StrategyKind::UnionFind.build(10).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let threshold = run_trial(system.as_mut(), &mut rng).unwrap();

        assert!(system.percolates());
        assert!(threshold > 0.0 && threshold <= 1.0);
        assert!((threshold - system.number_of_open_sites() as f64 / 100.0).abs() < 1e-12);
    }

    // Tests a 1x1 trial percolates after a single open
    #[test]
    fn test_single_site_trial() {
        let mut system = StrategyKind::Bfs.build(1).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        assert!((run_trial(system.as_mut(), &mut rng).unwrap() - 1.0).abs() < f64::EPSILON);
    }

    // Tests equal seeds give every strategy identical thresholds
    #[test]
    fn test_strategies_agree_under_same_seed() {
        let mut reference: Option<Vec<f64>> = None;
        for kind in StrategyKind::ALL {
            let mut experiment = Experiment::new(CONFIG, kind).unwrap();
            let mut thresholds = Vec::new();
            while !experiment.is_finished() {
                thresholds.push(experiment.run_next().unwrap());
            }

            match &reference {
                Some(expected) => assert_eq!(&thresholds, expected, "{} diverged", kind.name()),
                None => reference = Some(thresholds),
            }
        }
    }

    // Tests run_all completes every trial and summarizes them
    #[test]
    fn test_run_all() {
        let mut experiment = Experiment::new(CONFIG, StrategyKind::Dfs).unwrap();
        assert!(experiment.statistics().is_err());

        let stats = experiment.run_all().unwrap();
        assert_eq!(experiment.completed(), 6);
        assert_eq!(stats.trials, 6);
        assert!(stats.mean > 0.0 && stats.mean <= 1.0);
        assert_eq!(experiment.kind(), StrategyKind::Dfs);
    }

    // Tests configuration limits
    #[test]
    fn test_config_validation() {
        let zero_size = ExperimentConfig { size: 0, ..CONFIG };
        let zero_trials = ExperimentConfig { trials: 0, ..CONFIG };
        let huge = ExperimentConfig {
            size: usize::MAX,
            ..CONFIG
        };

        for config in [zero_size, zero_trials, huge] {
            assert!(matches!(
                Experiment::new(config, StrategyKind::UnionFind),
                Err(PercolationError::InvalidParameter { .. })
            ));
        }
        assert!(CONFIG.validate().is_ok());
    }
}
