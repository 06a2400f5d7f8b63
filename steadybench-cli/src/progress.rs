//! Terminal Progress
//!
//! indicatif-backed implementation of the core's progress sink. The bar
//! length is only known once the measurement loop has planned, so it is set
//! lazily on the first callback.

use indicatif::{ProgressBar, ProgressStyle};
use steadybench_core::{ProgressSink, RunProgress};
use steadybench_report::format_duration;

/// Per-benchmark progress bar.
pub struct ConsoleProgress {
    bar: ProgressBar,
}

impl ConsoleProgress {
    /// Create a bar prefixed with the benchmark name.
    pub fn new(name: &str) -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{prefix:.bold} [{bar:20.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        bar.set_prefix(name.to_string());
        Self { bar }
    }

    /// Clear the bar once the benchmark completes; the result block replaces
    /// it.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressSink for ConsoleProgress {
    fn on_run_complete(&self, progress: &RunProgress) {
        if self.bar.length().unwrap_or(0) == 0 {
            self.bar.set_length(progress.max_runs as u64 + 1);
        }
        self.bar.set_position(progress.run_index as u64 + 1);

        if let Some(best) = progress.best {
            self.bar.set_message(format!(
                "μ = {} ± {:.2}%, N = {}",
                format_duration(best.mean_ns),
                best.relative_std_dev,
                best.iterations
            ));
        }
    }
}
