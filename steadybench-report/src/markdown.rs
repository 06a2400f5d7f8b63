//! Markdown Output

use crate::format::{format_duration, ordinal};
use crate::record::BenchmarkRecord;

/// Generate a Markdown report: one table, one row per record. Durations are
/// human-scaled; the raw nanosecond values belong to the CSV/JSON exports.
pub fn generate_markdown_report(records: &[BenchmarkRecord]) -> String {
    let mut out = String::new();

    out.push_str("# Benchmark Results\n\n");
    out.push_str(
        "| Name | Runs | Iterations/Run | Average | Fastest | Slowest | Best Run | Average Performance |\n",
    );
    out.push_str("|---|---|---|---|---|---|---|---|\n");

    for r in records {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} ± {:.2}% ({} run) | {:.0} iterations/s |\n",
            r.name,
            r.num_runs,
            r.num_iterations,
            format_duration(r.mean_execution_time),
            format_duration(r.fastest_execution_time),
            format_duration(r.slowest_execution_time),
            format_duration(r.lowest_rsd_mean),
            r.lowest_rsd,
            ordinal(r.lowest_rsd_index + 1),
            r.average_iteration_performance,
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_header_separator_and_rows() {
        let record = BenchmarkRecord {
            name: "sorting".to_string(),
            num_runs: 11,
            num_iterations: 1_000,
            mean_execution_time: 1_500.0,
            fastest_execution_time: 1_000.0,
            slowest_execution_time: 2_000.0,
            lowest_rsd: 0.5,
            lowest_rsd_mean: 1_400.0,
            lowest_rsd_index: 0,
            average_iteration_performance: 666_667.0,
            fastest_iteration_performance: 1_000_000.0,
            slowest_iteration_performance: 500_000.0,
        };

        let md = generate_markdown_report(&[record]);
        let lines: Vec<&str> = md.lines().collect();

        assert_eq!(lines[0], "# Benchmark Results");
        assert!(lines[2].starts_with("| Name |"));
        assert!(lines[3].starts_with("|---|"));
        assert!(lines[4].contains("| sorting | 11 | 1000 | 1.50us |"));
        assert!(lines[4].contains("± 0.50% (1st run)"));
    }
}
