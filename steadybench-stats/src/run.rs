//! Per-Run Summary Statistics
//!
//! One run is a batch of individually timed invocations. Its dispersion is
//! summarized with the population variance (divisor = N): the batch is the
//! entire population of interest for that run, not a sample drawn from one.

/// Summary statistics for one run's batch of duration samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunStatistics {
    /// Arithmetic mean of the batch, in nanoseconds.
    pub mean: f64,
    /// Population variance (divisor = N) of the batch, in ns².
    pub variance: f64,
    /// Square root of the variance, in nanoseconds.
    pub std_dev: f64,
}

/// Compute per-run statistics from a batch of duration samples.
///
/// An empty batch yields all-zero statistics; the measurement loop never
/// produces one since every plan has at least one iteration per run.
pub fn compute_run(samples: &[f64]) -> RunStatistics {
    if samples.is_empty() {
        return RunStatistics {
            mean: 0.0,
            variance: 0.0,
            std_dev: 0.0,
        };
    }

    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / n;

    RunStatistics {
        mean,
        variance,
        std_dev: variance.sqrt(),
    }
}

impl RunStatistics {
    /// Relative standard deviation as a percentage of the mean.
    ///
    /// Returns `None` when the mean is zero (timer resolution too coarse for
    /// the measured work), so degenerate runs never divide by zero and can be
    /// excluded from best-estimate comparison.
    pub fn relative_std_dev(&self) -> Option<f64> {
        if self.mean == 0.0 {
            None
        } else {
            Some(self.std_dev * 100.0 / self.mean)
        }
    }
}
