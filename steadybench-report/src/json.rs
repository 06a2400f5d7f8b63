//! JSON Output

use crate::record::BenchmarkRecord;

/// Generate a prettified JSON report: an array of records.
pub fn generate_json_report(records: &[BenchmarkRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}
