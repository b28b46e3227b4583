//! Tests for threshold summary statistics

#[cfg(test)]
mod tests {
    use percolate::analysis::statistics::{ThresholdStatistics, mean, sample_std_dev};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // Tests the mean of a known sample
    #[test]
    fn test_mean() {
        assert!(mean(&[0.5, 0.6, 0.7]).is_some_and(|m: f64| close(m, 0.6)));
        assert_eq!(mean::<f64>(&[]), None);
    }

    // Tests Bessel-corrected standard deviation
    #[test]
    fn test_sample_std_dev() {
        let samples = [2.0_f32, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let deviation = sample_std_dev(&samples).unwrap_or_default();
        assert!((deviation - 2.138_09).abs() < 1e-4);
    }

    // Tests a single trial has zero spread and a degenerate interval
    #[test]
    fn test_single_sample() {
        let stats = ThresholdStatistics::from_samples(&[0.59]).unwrap();
        assert_eq!(stats.trials, 1);
        assert!(close(stats.std_dev, 0.0));
        assert!(close(stats.confidence_low(), 0.59));
        assert!(close(stats.confidence_high(), 0.59));
    }

    // Tests the interval is centered on the mean with z = 1.96
    #[test]
    fn test_confidence_interval() {
        let stats = ThresholdStatistics::from_samples(&[0.5, 0.7, 0.5, 0.7]).unwrap();
        let expected_margin = 1.96 * stats.std_dev / 2.0;
        assert!(close(stats.mean, 0.6));
        assert!(close(stats.margin(), expected_margin));
        assert!(close(stats.confidence_low(), 0.6 - expected_margin));
        assert!(close(stats.confidence_high(), 0.6 + expected_margin));
    }

    // Tests empty samples are rejected
    #[test]
    fn test_empty_samples_rejected() {
        assert!(ThresholdStatistics::from_samples(&[]).is_err());
    }
}
