//! Result Record
//!
//! The immutable record handed to the console writer and the exporters.
//! Every export format is a serialization of exactly this record.

use serde::{Deserialize, Serialize};
use steadybench_core::Measurement;

/// Final report record for one benchmark.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Benchmark name.
    pub name: String,
    /// Runs executed.
    pub num_runs: usize,
    /// Iterations batched into each run.
    pub num_iterations: usize,
    /// Mean execution time over all samples, in nanoseconds.
    pub mean_execution_time: f64,
    /// Fastest single sample, in nanoseconds.
    pub fastest_execution_time: f64,
    /// Slowest single sample, in nanoseconds.
    pub slowest_execution_time: f64,
    /// Relative standard deviation of the most stable run, in percent.
    pub lowest_rsd: f64,
    /// Mean execution time of the most stable run, in nanoseconds.
    pub lowest_rsd_mean: f64,
    /// Zero-based index of the most stable run.
    pub lowest_rsd_index: usize,
    /// Iterations per second at the mean execution time.
    pub average_iteration_performance: f64,
    /// Iterations per second at the fastest sample.
    pub fastest_iteration_performance: f64,
    /// Iterations per second at the slowest sample.
    pub slowest_iteration_performance: f64,
}

/// ops/sec for a duration, 0.0 for a degenerate duration.
fn iterations_per_second(duration_ns: f64) -> f64 {
    if duration_ns > 0.0 {
        1e9 / duration_ns
    } else {
        0.0
    }
}

impl BenchmarkRecord {
    /// Build the record from a completed measurement.
    ///
    /// A measurement with no best run (every run degenerate) zeroes the
    /// best-run fields; the throughput fields guard the division as well.
    pub fn from_measurement(name: impl Into<String>, measurement: &Measurement) -> Self {
        let (lowest_rsd, lowest_rsd_mean, lowest_rsd_index) = match measurement.best {
            Some(best) => (best.relative_std_dev, best.mean_ns, best.run_index),
            None => (0.0, 0.0, 0),
        };

        Self {
            name: name.into(),
            num_runs: measurement.num_runs,
            num_iterations: measurement.iterations_per_run,
            mean_execution_time: measurement.mean_ns,
            fastest_execution_time: measurement.fastest_ns,
            slowest_execution_time: measurement.slowest_ns,
            lowest_rsd,
            lowest_rsd_mean,
            lowest_rsd_index,
            average_iteration_performance: iterations_per_second(measurement.mean_ns),
            fastest_iteration_performance: iterations_per_second(measurement.fastest_ns),
            slowest_iteration_performance: iterations_per_second(measurement.slowest_ns),
        }
    }

    /// Whether the timer could not resolve this workload at all.
    pub fn is_degenerate(&self) -> bool {
        self.mean_execution_time == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use steadybench_core::BestRun;

    fn measurement() -> Measurement {
        Measurement {
            iterations_per_run: 32_000,
            num_runs: 1_001,
            mean_ns: 2_000.0,
            fastest_ns: 1_500.0,
            slowest_ns: 4_000.0,
            best: Some(BestRun {
                mean_ns: 1_900.0,
                relative_std_dev: 0.8,
                run_index: 17,
                iterations: 32_000,
            }),
        }
    }

    #[test]
    fn throughput_is_reciprocal_of_duration() {
        let record = BenchmarkRecord::from_measurement("parse", &measurement());

        assert!((record.average_iteration_performance - 500_000.0).abs() < 1e-6);
        assert!((record.fastest_iteration_performance - 1e9 / 1_500.0).abs() < 1e-6);
        assert!((record.slowest_iteration_performance - 250_000.0).abs() < 1e-6);
        assert_eq!(record.lowest_rsd_index, 17);
        assert!(!record.is_degenerate());
    }

    #[test]
    fn degenerate_measurement_zeroes_derived_fields() {
        let m = Measurement {
            iterations_per_run: 128_000,
            num_runs: 10_001,
            mean_ns: 0.0,
            fastest_ns: 0.0,
            slowest_ns: 0.0,
            best: None,
        };
        let record = BenchmarkRecord::from_measurement("noop", &m);

        assert!(record.is_degenerate());
        assert_eq!(record.average_iteration_performance, 0.0);
        assert_eq!(record.lowest_rsd, 0.0);
        assert_eq!(record.lowest_rsd_index, 0);
    }

    #[test]
    fn record_round_trips_through_serde() {
        let record = BenchmarkRecord::from_measurement("parse", &measurement());
        let json = serde_json::to_string(&record).unwrap();
        let back: BenchmarkRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(back.name, "parse");
        assert_eq!(back.num_runs, 1_001);
        assert!((back.lowest_rsd - 0.8).abs() < f64::EPSILON);
    }
}
