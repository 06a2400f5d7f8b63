#![warn(missing_docs)]
//! Steadybench Statistical Engine
//!
//! Pure statistics over timed samples:
//! - Per-run summary (mean, population variance, relative standard deviation)
//! - Lowest-RSD best-estimate accumulation across runs
//! - Pooled aggregation of every sample across every run

mod best;
mod pool;
mod run;

pub use best::{BestEstimate, BestRun};
pub use pool::SamplePool;
pub use run::{RunStatistics, compute_run};
