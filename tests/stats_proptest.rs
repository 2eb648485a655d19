//! Property-based tests for the statistics accumulator
//!
//! The accumulator computes variance from running sums; these tests pin it
//! against a direct two-pass computation over the same values. The tolerance
//! scales with the magnitude of the cancelled mean-square term, which bounds
//! the error of the running formula.

use proptest::prelude::*;
use textmetrics::metrics::runner::run_source;
use textmetrics::metrics::stats::StatsAccumulator;

fn values_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6f64..1.0e6, 1..100)
}

fn source_of(values: &[f64]) -> String {
    let mut source = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    source.push('\n');
    source
}

proptest! {
    #[test]
    fn incremental_variance_matches_two_pass(values in values_strategy()) {
        let report = run_source(StatsAccumulator::new(), &source_of(&values));
        let summary = report.summary.unwrap();

        let count = values.len() as f64;
        let mean = values.iter().sum::<f64>() / count;
        let direct = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / count;

        let tolerance = 1e-9 * (1.0 + mean * mean + direct);
        prop_assert!(
            (summary.variance - direct).abs() <= tolerance,
            "incremental {} vs direct {}",
            summary.variance,
            direct
        );
    }

    #[test]
    fn variance_is_never_negative(values in values_strategy()) {
        let report = run_source(StatsAccumulator::new(), &source_of(&values));
        let summary = report.summary.unwrap();

        prop_assert!(summary.variance >= 0.0);
        prop_assert!(summary.std_dev >= 0.0);
    }

    #[test]
    fn median_lies_within_the_data(values in values_strategy()) {
        let report = run_source(StatsAccumulator::new(), &source_of(&values));
        let summary = report.summary.unwrap();

        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(summary.median >= min && summary.median <= max);
    }

    #[test]
    fn count_tracks_parsed_lines(values in values_strategy()) {
        let report = run_source(StatsAccumulator::new(), &source_of(&values));
        let summary = report.summary.unwrap();

        prop_assert_eq!(summary.count, values.len());
        prop_assert!(report.failures.is_empty());
    }
}
