#![warn(missing_docs)]
//! Steadybench Core - Calibration and Measurement
//!
//! This crate provides the measurement engine:
//! - Benchmark registration (`BenchmarkDef` collected via `inventory`)
//! - High-resolution wall-clock timing around single invocations
//! - Calibration (warmup minimum as the noise-floor estimate)
//! - Iteration planning from magnitude bands
//! - The measurement loop with pooled statistics and best-estimate tracking

mod calibrate;
mod measure;
mod plan;
mod runner;

pub use calibrate::{WARMUP_CALLS, estimate_execution_time};
pub use measure::{Timer, time_call};
pub use plan::Plan;
pub use runner::{
    Measurement, NullProgress, ProgressSink, RunProgress, bench_work, run_benchmark,
};
// Re-exported because it appears in `Measurement` and `RunProgress`.
pub use steadybench_stats::BestRun;

/// Benchmark registered via `#[bench]`.
///
/// The function body is the timed unit of work; it takes no arguments and
/// returns nothing. Fixture setup is a convention at the boundary (statics,
/// lazy initialization) — the timed region is always the whole call.
#[derive(Debug, Clone)]
pub struct BenchmarkDef {
    /// Unique identifier (module path qualified).
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// The unit of work under measurement.
    pub runner_fn: fn(),
    /// Source file path.
    pub file: &'static str,
    /// Source line number.
    pub line: u32,
}

inventory::collect!(BenchmarkDef);

/// Anchor to prevent LTO from stripping inventory entries
#[used]
#[doc(hidden)]
pub static REGISTRY_ANCHOR: fn() = || {
    for _ in inventory::iter::<BenchmarkDef> {}
};
