#![warn(missing_docs)]
//! Steadybench CLI Library
//!
//! CLI infrastructure for benchmark binaries. Call `steadybench::run()` (or
//! `steadybench_cli::run()`) from your binary's `main` to get the harness
//! with your registered benchmarks.
//!
//! # Example
//!
//! ```ignore
//! use steadybench::prelude::*;
//!
//! #[bench]
//! fn my_benchmark() {
//!     expensive_operation();
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     steadybench::run()
//! }
//! ```

mod config;
mod executor;
mod progress;

pub use config::{OutputConfig, RunnerConfig, SteadyConfig};
pub use executor::{BenchOutcome, execute};
pub use progress::ConsoleProgress;

use clap::{Parser, Subcommand};
use regex::Regex;
use std::path::PathBuf;
use steadybench_core::BenchmarkDef;
use steadybench_report::{OutputFormat, write_failure, write_record, write_report};

/// Steadybench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "steadybench")]
#[command(author, version, about = "Steadybench - statistical microbenchmark harness")]
pub struct Cli {
    /// Optional subcommand (list, run); defaults to run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Filter benchmarks by regex pattern
    #[arg(default_value = ".*")]
    pub filter: String,

    /// Export results in this format: csv, json, md
    #[arg(short = 'e', long)]
    pub export: Option<String>,

    /// Export destination (defaults to config or target/steadybench/)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Internal: Absorb cargo bench's --bench flag
    #[arg(long, hide = true)]
    pub bench: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all registered benchmarks
    List,
    /// Run benchmarks (default)
    Run,
}

/// Run the steadybench CLI with the given process arguments.
/// This is the main entry point for benchmark binaries.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the steadybench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    let filter = if cli.verbose {
        "steadybench=debug"
    } else {
        "steadybench=info"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // steady.toml supplies defaults; CLI flags override.
    let config = SteadyConfig::discover().unwrap_or_default();

    match cli.command {
        Some(Commands::List) => list_benchmarks(&cli),
        _ => run_benchmarks(&cli, &config),
    }
}

/// Collect registered benchmarks matching the filter, sorted by id for
/// deterministic execution order.
fn filter_benchmarks(filter: &str) -> anyhow::Result<Vec<&'static BenchmarkDef>> {
    let re = Regex::new(filter)
        .map_err(|e| anyhow::anyhow!("invalid filter pattern '{}': {}", filter, e))?;

    let mut benchmarks: Vec<&'static BenchmarkDef> = inventory::iter::<BenchmarkDef>
        .into_iter()
        .filter(|b| re.is_match(b.id) || re.is_match(b.name))
        .collect();
    benchmarks.sort_by_key(|b| b.id);
    Ok(benchmarks)
}

fn list_benchmarks(cli: &Cli) -> anyhow::Result<()> {
    let benchmarks = filter_benchmarks(&cli.filter)?;

    for bench in &benchmarks {
        println!("{} ({}:{})", bench.id, bench.file, bench.line);
    }
    println!("{} benchmarks found.", benchmarks.len());

    Ok(())
}

fn run_benchmarks(cli: &Cli, config: &SteadyConfig) -> anyhow::Result<()> {
    let benchmarks = filter_benchmarks(&cli.filter)?;

    if benchmarks.is_empty() {
        println!("No benchmarks found.");
        return Ok(());
    }

    println!("Running {} benchmarks...\n", benchmarks.len());

    let show_progress = !cli.no_progress && config.runner.progress;
    let outcomes = execute(&benchmarks, show_progress);

    let mut records = Vec::with_capacity(outcomes.len());
    let mut failed = 0usize;

    for outcome in outcomes {
        match outcome.record {
            Some(record) => {
                print!("{}", write_record(&record));
                records.push(record);
            }
            None => {
                failed += 1;
                let message = outcome.error_message.as_deref().unwrap_or("unknown failure");
                eprint!("{}", write_failure(&outcome.name, message));
            }
        }
    }

    export_records(cli, config, &records)?;

    if failed > 0 {
        eprintln!("{} benchmark(s) failed", failed);
        std::process::exit(1);
    }

    Ok(())
}

/// Write the export file when a format was selected via CLI or config.
fn export_records(
    cli: &Cli,
    config: &SteadyConfig,
    records: &[steadybench_report::BenchmarkRecord],
) -> anyhow::Result<()> {
    let format_name = match cli.export.as_deref().or(config.output.format.as_deref()) {
        Some(name) => name,
        None => return Ok(()),
    };
    let format: OutputFormat = format_name
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let path = cli
        .output
        .clone()
        .or_else(|| config.output.path.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| default_export_path(format));

    write_report(format, &path, records)?;
    println!("Report written to: {}", path.display());

    Ok(())
}

fn default_export_path(format: OutputFormat) -> PathBuf {
    let extension = match format {
        OutputFormat::Csv => "csv",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    };
    PathBuf::from(format!("target/steadybench/report.{}", extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_follow_format() {
        assert_eq!(
            default_export_path(OutputFormat::Csv),
            PathBuf::from("target/steadybench/report.csv")
        );
        assert_eq!(
            default_export_path(OutputFormat::Markdown),
            PathBuf::from("target/steadybench/report.md")
        );
    }

    #[test]
    fn invalid_filter_is_reported() {
        let err = filter_benchmarks("[unclosed").unwrap_err();
        assert!(err.to_string().contains("invalid filter pattern"));
    }

    #[test]
    fn cli_parses_export_flags() {
        let cli = Cli::parse_from([
            "steadybench",
            "split.*",
            "--export",
            "json",
            "--output",
            "out/report.json",
            "--no-progress",
        ]);

        assert_eq!(cli.filter, "split.*");
        assert_eq!(cli.export.as_deref(), Some("json"));
        assert_eq!(cli.output.as_deref(), Some(std::path::Path::new("out/report.json")));
        assert!(cli.no_progress);
    }
}
