#![warn(missing_docs)]
//! # Steadybench
//!
//! Statistical microbenchmarking harness with adaptive calibration.
//!
//! Steadybench repeatedly executes a caller-supplied unit of work, picks
//! iteration and run counts from the work's magnitude, and reports
//! execution-time and throughput statistics:
//! - **Adaptive Calibration**: a short warmup phase estimates the cost of a
//!   single invocation; the minimum observed duration is the noise-floor
//!   estimate driving the plan
//! - **Magnitude-Banded Planning**: cheap work gets many iterations per run
//!   and many runs; expensive work gets few of both, bounding total
//!   wall-clock cost
//! - **Lowest-RSD Best Estimate**: the run with the lowest relative standard
//!   deviation is retained as the most trustworthy representative
//!   measurement
//! - **Panic Containment**: a panicking benchmark fails alone with its name
//!   and message; the rest of the suite still runs, and the process exits
//!   nonzero
//! - **Exports**: CSV / JSON / Markdown serializations of the result record
//!
//! ## Quick Start
//!
//! ```ignore
//! use steadybench::prelude::*;
//!
//! #[bench]
//! fn my_benchmark() {
//!     expensive_operation();
//! }
//!
//! fn main() {
//!     if let Err(e) = steadybench::run() {
//!         eprintln!("Error: {}", e);
//!         std::process::exit(1);
//!     }
//! }
//! ```
//!
//! Fixture setup belongs outside the benchmark function (statics, lazy
//! initialization); the whole function body is the timed unit of work.

// Re-export core types
pub use steadybench_core::{
    BenchmarkDef, Measurement, NullProgress, Plan, ProgressSink, RunProgress, bench_work,
    estimate_execution_time, run_benchmark,
};

// Re-export macros
pub use steadybench_macros::bench;

// Re-export stats
pub use steadybench_stats::{BestEstimate, BestRun, RunStatistics, SamplePool, compute_run};

// Re-export report types
pub use steadybench_report::{
    BenchmarkRecord, OutputFormat, format_duration, format_signed_duration, write_report,
};

/// Internal re-exports for macro use
#[doc(hidden)]
pub mod internal {
    pub use inventory;
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{BenchmarkDef, bench};
}

/// Run the steadybench CLI harness.
///
/// Call this from your benchmark binary's `main()`:
/// ```ignore
/// fn main() {
///     steadybench::run().unwrap();
/// }
/// ```
pub use steadybench_cli::run;
