//! Measurement Loop
//!
//! Executes runs of batched, individually timed work invocations until the
//! planned run budget is exhausted, folding per-run statistics into the
//! pooled aggregate and the lowest-RSD best estimate as it goes.

use crate::calibrate::estimate_execution_time;
use crate::measure::time_call;
use crate::plan::Plan;
use steadybench_stats::{BestEstimate, BestRun, SamplePool, compute_run};

/// Snapshot handed to the progress sink after each run.
#[derive(Debug, Clone, Copy)]
pub struct RunProgress {
    /// Zero-based index of the run that just completed.
    pub run_index: usize,
    /// The plan's run-counter bound; the final run has `run_index == max_runs`.
    pub max_runs: usize,
    /// Current best estimate, absent until a run with a defined RSD occurs.
    pub best: Option<BestRun>,
}

/// Receiver for per-run progress, injected into the measurement loop.
///
/// Purely informational; nothing is returned to the loop. Implementations
/// live outside the core (terminal bars, log lines, test counters).
pub trait ProgressSink {
    /// Called once after every run completes.
    fn on_run_complete(&self, progress: &RunProgress);
}

/// Sink that discards progress. For library use and tests.
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn on_run_complete(&self, _progress: &RunProgress) {}
}

/// Final aggregated timing for one benchmark.
#[derive(Debug, Clone, Copy)]
pub struct Measurement {
    /// Iterations batched into each run.
    pub iterations_per_run: usize,
    /// Runs actually executed (`plan.max_runs + 1`).
    pub num_runs: usize,
    /// Mean over every sample of every run, in nanoseconds.
    pub mean_ns: f64,
    /// Fastest single sample, in nanoseconds.
    pub fastest_ns: f64,
    /// Slowest single sample, in nanoseconds.
    pub slowest_ns: f64,
    /// Lowest-RSD run, absent only if every run was degenerate.
    pub best: Option<BestRun>,
}

/// Run the measurement loop for `work` under a fixed `plan`.
///
/// Each run times `plan.iterations_per_run` invocations individually, then
/// per-run statistics are folded into the pool and offered to the best
/// estimate. The run counter goes 0..=`plan.max_runs` inclusive, and the
/// sink fires once per run; there is no convergence-based early exit — the
/// full planned budget always runs. A panic in `work` propagates
/// immediately; a partially measured benchmark has no statistical validity,
/// so no `Measurement` is produced for it.
pub fn run_benchmark<F: FnMut()>(
    mut work: F,
    plan: Plan,
    progress: &dyn ProgressSink,
) -> Measurement {
    let mut durations: Vec<f64> = Vec::with_capacity(plan.iterations_per_run);
    let mut best = BestEstimate::new();
    let mut pool = SamplePool::new();
    let mut run_index = 0usize;

    loop {
        for _ in 0..plan.iterations_per_run {
            durations.push(time_call(&mut work));
        }

        let stats = compute_run(&durations);
        pool.merge(&durations);
        best = best.observe(run_index, plan.iterations_per_run, &stats);

        progress.on_run_complete(&RunProgress {
            run_index,
            max_runs: plan.max_runs,
            best: best.best(),
        });

        durations.clear();

        if run_index >= plan.max_runs {
            break;
        }
        run_index += 1;
    }

    Measurement {
        iterations_per_run: plan.iterations_per_run,
        num_runs: run_index + 1,
        mean_ns: pool.mean_ns(),
        fastest_ns: pool.fastest_ns(),
        slowest_ns: pool.slowest_ns(),
        best: best.best(),
    }
}

/// Calibrate, plan and measure `work` in one step.
///
/// Calibration runs twice: the first, coarse pass sizes the initial sample
/// buffer, then a second pass picks the plan that stays fixed for the whole
/// benchmark. The first estimate is taken cold and tends to be inflated, so
/// the second supersedes it.
pub fn bench_work<F: FnMut()>(mut work: F, progress: &dyn ProgressSink) -> Measurement {
    let _coarse = Plan::for_estimate(estimate_execution_time(&mut work));
    let plan = Plan::for_estimate(estimate_execution_time(&mut work));
    run_benchmark(work, plan, progress)
}
