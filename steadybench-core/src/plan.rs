//! Iteration Planning
//!
//! Maps a calibration estimate to iteration and run counts. Cheap work needs
//! many repetitions per run to amortize timer overhead into a measurable
//! aggregate but can afford many runs; expensive work gets few iterations and
//! few runs to bound total wall-clock cost.

/// Iteration and run counts fixed for the duration of one benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    /// Work invocations batched into one timed run. Always >= 1.
    pub iterations_per_run: usize,
    /// Upper bound on the run counter; the counter goes 0..=max_runs
    /// inclusive, so one more run than this executes. Always >= 1.
    pub max_runs: usize,
}

/// Magnitude bands, scanned in order. Each row is
/// (exclusive upper bound on the estimate in ns, iterations, max runs).
const BANDS: [(f64, usize, usize); 4] = [
    (100.0, 128_000, 10_000),
    (1_000.0, 64_000, 5_000),
    (1_000_000.0, 32_000, 1_000),
    (1_000_000_000.0, 4_000, 100),
];

/// Fallback for estimates of a second or more.
const SLOWEST_BAND: (usize, usize) = (1_000, 10);

impl Plan {
    /// Select the plan for a calibration estimate.
    ///
    /// Deterministic step function over the band table; lower bounds are
    /// inclusive, upper bounds exclusive. The calibrator never produces a
    /// negative estimate.
    pub fn for_estimate(estimate_ns: f64) -> Self {
        for (upper_bound, iterations_per_run, max_runs) in BANDS {
            if estimate_ns < upper_bound {
                return Self {
                    iterations_per_run,
                    max_runs,
                };
            }
        }
        let (iterations_per_run, max_runs) = SLOWEST_BAND;
        Self {
            iterations_per_run,
            max_runs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(estimate_ns: f64) -> (usize, usize) {
        let p = Plan::for_estimate(estimate_ns);
        (p.iterations_per_run, p.max_runs)
    }

    #[test]
    fn bands_match_the_magnitude_table() {
        assert_eq!(plan(0.0), (128_000, 10_000));
        assert_eq!(plan(50.0), (128_000, 10_000));
        assert_eq!(plan(500.0), (64_000, 5_000));
        assert_eq!(plan(50_000.0), (32_000, 1_000));
        assert_eq!(plan(50_000_000.0), (4_000, 100));
        assert_eq!(plan(5e9), (1_000, 10));
    }

    #[test]
    fn lower_bounds_are_inclusive_upper_exclusive() {
        assert_eq!(plan(99.0), (128_000, 10_000));
        assert_eq!(plan(100.0), (64_000, 5_000));
        assert_eq!(plan(999.0), (64_000, 5_000));
        assert_eq!(plan(1_000.0), (32_000, 1_000));
        assert_eq!(plan(999_999.0), (32_000, 1_000));
        assert_eq!(plan(1_000_000.0), (4_000, 100));
        assert_eq!(plan(999_999_999.0), (4_000, 100));
        assert_eq!(plan(1e9), (1_000, 10));
    }

    #[test]
    fn every_band_plans_at_least_one_iteration_and_run() {
        for estimate in [0.0, 99.0, 100.0, 1e3, 1e6, 1e9, 1e12] {
            let p = Plan::for_estimate(estimate);
            assert!(p.iterations_per_run >= 1);
            assert!(p.max_runs >= 1);
        }
    }
}
