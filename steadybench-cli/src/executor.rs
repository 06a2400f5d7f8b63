//! Benchmark Execution
//!
//! Runs each registered benchmark through the measurement engine. A panic in
//! one work unit must not take down the whole suite, and a partially measured
//! benchmark has no statistical validity, so the panic is contained at this
//! boundary: the failed benchmark yields no record, only its name and the
//! panic message.

use crate::progress::ConsoleProgress;
use steadybench_core::{BenchmarkDef, NullProgress, ProgressSink, bench_work};
use steadybench_report::BenchmarkRecord;

/// Outcome of executing a single benchmark.
#[derive(Debug)]
pub struct BenchOutcome {
    /// Benchmark identifier.
    pub id: String,
    /// Benchmark display name.
    pub name: String,
    /// The result record; absent when the work unit panicked.
    pub record: Option<BenchmarkRecord>,
    /// Panic message for a failed benchmark.
    pub error_message: Option<String>,
}

impl BenchOutcome {
    /// Whether the benchmark completed its full measurement.
    pub fn passed(&self) -> bool {
        self.record.is_some()
    }
}

/// Execute benchmarks sequentially and collect their outcomes.
pub fn execute(benchmarks: &[&BenchmarkDef], show_progress: bool) -> Vec<BenchOutcome> {
    benchmarks
        .iter()
        .map(|bench| execute_single(bench, show_progress))
        .collect()
}

fn execute_single(bench: &BenchmarkDef, show_progress: bool) -> BenchOutcome {
    let progress = show_progress.then(|| ConsoleProgress::new(bench.name));
    let sink: &dyn ProgressSink = match &progress {
        Some(bar) => bar,
        None => &NullProgress,
    };

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        bench_work(bench.runner_fn, sink)
    }));

    if let Some(bar) = &progress {
        bar.finish();
    }

    match result {
        Ok(measurement) => {
            tracing::debug!(
                id = bench.id,
                runs = measurement.num_runs,
                iterations = measurement.iterations_per_run,
                mean_ns = measurement.mean_ns,
                "benchmark complete"
            );
            BenchOutcome {
                id: bench.id.to_string(),
                name: bench.name.to_string(),
                record: Some(BenchmarkRecord::from_measurement(bench.name, &measurement)),
                error_message: None,
            }
        }
        Err(panic) => {
            let message = if let Some(s) = panic.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };

            tracing::debug!(id = bench.id, error = %message, "benchmark panicked");
            BenchOutcome {
                id: bench.id.to_string(),
                name: bench.name.to_string(),
                record: None,
                error_message: Some(message),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exploding() {
        panic!("fixture data missing");
    }

    #[test]
    fn panicking_benchmark_yields_no_record() {
        let def = BenchmarkDef {
            id: "exploding",
            name: "exploding",
            runner_fn: exploding,
            file: file!(),
            line: line!(),
        };

        let outcomes = execute(&[&def], false);

        assert_eq!(outcomes.len(), 1);
        let outcome = &outcomes[0];
        assert!(!outcome.passed());
        assert!(outcome.record.is_none());
        assert_eq!(outcome.name, "exploding");
        assert!(
            outcome
                .error_message
                .as_deref()
                .unwrap()
                .contains("fixture data missing")
        );
    }
}
