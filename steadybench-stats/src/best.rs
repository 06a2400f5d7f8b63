//! Lowest-RSD Best Estimate
//!
//! Across runs, the run with the lowest relative standard deviation is the
//! most trustworthy single representative measurement. The accumulator is a
//! plain value threaded through the measurement loop, so the monotonic
//! improvement invariant is testable without inspecting loop state.

use crate::run::RunStatistics;

/// The retained statistics of the most stable run seen so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestRun {
    /// Mean execution time of the retained run, in nanoseconds.
    pub mean_ns: f64,
    /// Relative standard deviation of the retained run, in percent.
    pub relative_std_dev: f64,
    /// Zero-based index of the retained run.
    pub run_index: usize,
    /// Iterations the retained run batched.
    pub iterations: usize,
}

/// Accumulator tracking the lowest-RSD run across a benchmark.
///
/// Only strictly lower RSD replaces the retained run, so exact ties keep the
/// earlier run. Runs whose RSD is undefined (zero mean) are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestEstimate {
    best: Option<BestRun>,
}

impl BestEstimate {
    /// Start with no retained run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer one run's statistics; returns the updated accumulator.
    #[must_use]
    pub fn observe(self, run_index: usize, iterations: usize, stats: &RunStatistics) -> Self {
        let Some(rsd) = stats.relative_std_dev() else {
            return self;
        };

        let improves = match self.best {
            Some(ref best) => rsd < best.relative_std_dev,
            None => true,
        };

        if improves {
            Self {
                best: Some(BestRun {
                    mean_ns: stats.mean,
                    relative_std_dev: rsd,
                    run_index,
                    iterations,
                }),
            }
        } else {
            self
        }
    }

    /// The retained run, if any run with a defined RSD was observed.
    pub fn best(&self) -> Option<BestRun> {
        self.best
    }
}
