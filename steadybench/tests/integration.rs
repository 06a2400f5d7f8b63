//! Integration tests for steadybench
//!
//! These tests verify the end-to-end behavior of the measurement engine
//! through the public facade.

use std::cell::RefCell;
use std::hint::black_box;
use steadybench::bench;
use steadybench::prelude::*;
use steadybench::{
    BenchmarkRecord, NullProgress, OutputFormat, Plan, ProgressSink, RunProgress, run_benchmark,
    write_report,
};

/// Busy loop of a few tens of microseconds, so timer jitter stays small
/// relative to the mean.
fn busy_work() {
    let mut acc = 0u64;
    for i in 0..50_000u64 {
        acc = acc.wrapping_add(black_box(i));
    }
    black_box(acc);
}

#[bench]
fn registered_example() {
    black_box((0..64u64).sum::<u64>());
}

/// The `#[bench]` attribute registers the function in the global registry.
#[test]
fn bench_attribute_registers_the_function() {
    let found = inventory::iter::<BenchmarkDef>
        .into_iter()
        .any(|b| b.id == "registered_example");
    assert!(found);
}

/// Sink recording the best RSD reported after each run.
struct RsdTrace {
    rsds: RefCell<Vec<f64>>,
}

impl ProgressSink for RsdTrace {
    fn on_run_complete(&self, progress: &RunProgress) {
        if let Some(best) = progress.best {
            self.rsds.borrow_mut().push(best.relative_std_dev);
        }
    }
}

/// The best estimate visible through the progress stream never regresses.
#[test]
fn best_rsd_is_monotonically_non_increasing() {
    let plan = Plan {
        iterations_per_run: 50,
        max_runs: 9,
    };
    let trace = RsdTrace {
        rsds: RefCell::new(Vec::new()),
    };

    run_benchmark(busy_work, plan, &trace);

    let rsds = trace.rsds.borrow();
    assert!(!rsds.is_empty());
    for pair in rsds.windows(2) {
        assert!(
            pair[1] <= pair[0],
            "best RSD regressed from {} to {}",
            pair[0],
            pair[1]
        );
    }
}

/// A steady busy loop measures with a stable best estimate.
///
/// This is a statistical assertion, not an exact one: the threshold is
/// deliberately generous so that only a badly disturbed environment (or a
/// broken aggregator) trips it.
#[test]
fn steady_work_yields_stable_best_estimate() {
    let plan = Plan {
        iterations_per_run: 200,
        max_runs: 19,
    };

    let measurement = run_benchmark(busy_work, plan, &NullProgress);

    assert_eq!(measurement.num_runs, 20);
    let best = measurement.best.expect("busy work has a defined RSD");
    assert!(
        best.relative_std_dev < 20.0,
        "best RSD {}% exceeds the stability threshold",
        best.relative_std_dev
    );
    assert!(measurement.fastest_ns > 0.0);
    assert!(measurement.fastest_ns <= measurement.mean_ns);
    assert!(measurement.slowest_ns >= measurement.mean_ns);
}

/// Measurement -> record -> JSON export -> parsed record.
#[test]
fn measurement_round_trips_through_json_export() {
    let plan = Plan {
        iterations_per_run: 20,
        max_runs: 4,
    };
    let measurement = run_benchmark(busy_work, plan, &NullProgress);
    let record = BenchmarkRecord::from_measurement("busy_work", &measurement);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    write_report(OutputFormat::Json, &path, std::slice::from_ref(&record)).unwrap();

    let json = std::fs::read_to_string(&path).unwrap();
    let parsed: Vec<BenchmarkRecord> = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].name, "busy_work");
    assert_eq!(parsed[0].num_runs, 5);
    assert_eq!(parsed[0].num_iterations, 20);
    assert!((parsed[0].mean_execution_time - record.mean_execution_time).abs() < 1e-9);
}
