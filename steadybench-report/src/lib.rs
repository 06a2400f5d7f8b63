#![warn(missing_docs)]
//! Steadybench Report - Records and Output
//!
//! The immutable result record plus everything that consumes it:
//! - Duration formatting (3-significant-digit and signed variants)
//! - Colored console output
//! - CSV / JSON / Markdown export generators

mod console;
mod csv;
mod format;
mod json;
mod markdown;
mod record;

pub use console::{write_failure, write_record};
pub use csv::generate_csv_report;
pub use format::{format_duration, format_signed_duration, ordinal};
pub use json::generate_json_report;
pub use markdown::generate_markdown_report;
pub use record::BenchmarkRecord;

use std::path::Path;

/// Export format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Comma separated values
    Csv,
    /// Prettified JSON
    Json,
    /// Markdown table
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            other => Err(format!("Unknown export format: {}", other)),
        }
    }
}

/// Failure while exporting a report to disk.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Filesystem failure creating or writing the destination.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    /// Record serialization failure.
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Serialize `records` in `format` and write them to `path`, creating parent
/// directories as needed.
pub fn write_report(
    format: OutputFormat,
    path: &Path,
    records: &[BenchmarkRecord],
) -> Result<(), ExportError> {
    let output = match format {
        OutputFormat::Csv => generate_csv_report(records),
        OutputFormat::Json => generate_json_report(records)?,
        OutputFormat::Markdown => generate_markdown_report(records),
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parses_known_names() {
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!(
            "markdown".parse::<OutputFormat>().unwrap(),
            OutputFormat::Markdown
        );
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn write_report_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/report.json");

        write_report(OutputFormat::Json, &path, &[]).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.trim(), "[]");
    }
}
