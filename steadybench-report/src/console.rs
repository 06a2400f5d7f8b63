//! Console Output
//!
//! Renders a benchmark record for the terminal. Colors come from the
//! `colored` crate, which honors NO_COLOR and non-tty output on its own.

use crate::format::{format_duration, format_signed_duration, ordinal};
use crate::record::BenchmarkRecord;
use colored::Colorize;

/// Render one benchmark's result block.
pub fn write_record(record: &BenchmarkRecord) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", format!("✓ {}", record.name).green().bold()));
    out.push_str(&format!("    {}\n", "Configuration".bold().underline()));
    out.push_str(&format!(
        "      {} runs, {} iterations per run\n",
        record.num_runs, record.num_iterations
    ));

    if record.is_degenerate() {
        out.push_str(&format!(
            "      {}\n\n",
            "timer resolution too coarse for this workload".yellow()
        ));
        return out;
    }

    out.push_str(&format!("    {}\n", "Execution Time".bold().underline()));
    out.push_str(&format!(
        "      Average    {:>10}\n",
        format_duration(record.mean_execution_time)
    ));

    let fastest_delta = record.fastest_execution_time - record.mean_execution_time;
    let fastest_pct = fastest_delta / record.mean_execution_time * 100.0;
    out.push_str(&format!(
        "      Fastest    {:>10} ({})\n",
        format_duration(record.fastest_execution_time),
        format!(
            "{} / {:.1} %",
            format_signed_duration(fastest_delta),
            fastest_pct
        )
        .green()
    ));

    let slowest_delta = record.slowest_execution_time - record.mean_execution_time;
    let slowest_pct = slowest_delta / record.mean_execution_time * 100.0;
    out.push_str(&format!(
        "      Slowest    {:>10} ({})\n",
        format_duration(record.slowest_execution_time),
        format!(
            "{} / {:.1} %",
            format_signed_duration(slowest_delta),
            slowest_pct
        )
        .red()
    ));

    out.push_str(&format!(
        "      {}\n",
        format!(
            "Best Run   {:>10} ± {:.2}% ({} run)",
            format_duration(record.lowest_rsd_mean),
            record.lowest_rsd,
            ordinal(record.lowest_rsd_index + 1)
        )
        .bold()
    ));

    out.push_str(&format!("    {}\n", "Performance".bold().underline()));
    out.push_str(&format!(
        "      Average    {:>10.0} iterations/s\n",
        record.average_iteration_performance
    ));
    out.push_str(&format!(
        "      Fastest    {:>10.0} iterations/s\n",
        record.fastest_iteration_performance
    ));
    out.push_str(&format!(
        "      Slowest    {:>10.0} iterations/s\n",
        record.slowest_iteration_performance
    ));
    out.push('\n');

    out
}

/// Render a failure line for a benchmark whose work unit panicked.
pub fn write_failure(name: &str, message: &str) -> String {
    format!(
        "{}\n      {}\n\n",
        format!("✗ {}", name).red().bold(),
        message
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> BenchmarkRecord {
        BenchmarkRecord {
            name: "string_split".to_string(),
            num_runs: 1_001,
            num_iterations: 32_000,
            mean_execution_time: 2_000.0,
            fastest_execution_time: 1_500.0,
            slowest_execution_time: 4_000.0,
            lowest_rsd: 0.82,
            lowest_rsd_mean: 1_900.0,
            lowest_rsd_index: 2,
            average_iteration_performance: 500_000.0,
            fastest_iteration_performance: 666_666.0,
            slowest_iteration_performance: 250_000.0,
        }
    }

    #[test]
    fn block_carries_all_sections() {
        colored::control::set_override(false);
        let out = write_record(&record());

        assert!(out.contains("✓ string_split"));
        assert!(out.contains("1001 runs, 32000 iterations per run"));
        assert!(out.contains("2.00us"));
        assert!(out.contains("(-500 ns / -25.0 %)"));
        assert!(out.contains("(+2 us / 100.0 %)"));
        assert!(out.contains("± 0.82% (3rd run)"));
        assert!(out.contains("iterations/s"));
        colored::control::unset_override();
    }

    #[test]
    fn degenerate_record_notes_timer_resolution() {
        colored::control::set_override(false);
        let mut rec = record();
        rec.mean_execution_time = 0.0;
        let out = write_record(&rec);

        assert!(out.contains("timer resolution too coarse"));
        assert!(!out.contains("Execution Time"));
        colored::control::unset_override();
    }

    #[test]
    fn failure_names_the_benchmark() {
        colored::control::set_override(false);
        let out = write_failure("string_split", "index out of bounds");
        assert!(out.contains("✗ string_split"));
        assert!(out.contains("index out of bounds"));
        colored::control::unset_override();
    }
}
