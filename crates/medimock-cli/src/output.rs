// crates/medimock-cli/src/output.rs
//
// Output formatting utilities for the MediMock CLI.
// Supports table and JSON output modes.

use serde::Serialize;
use tabled::{Table, Tabled};

use medimock_core::{BlockchainRecord, ReportAck, VerificationResult};

/// Output format for CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    /// Two-column field/value table (default).
    Table,
    /// JSON output for machine consumption.
    Json,
}

/// One line of a field/value table.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct FieldRow {
    #[tabled(rename = "Field")]
    pub field: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl FieldRow {
    fn new(field: &str, value: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            value: value.into(),
        }
    }
}

/// Format a slice of Tabled items as a table string.
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    Table::new(data).to_string()
}

/// Format a serializable value as a pretty-printed JSON string.
pub fn format_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|e| format!("JSON serialization error: {}", e))
}

/// Render `data` in the requested format, using `rows` for tables.
pub fn render<T: Serialize>(format: &OutputFormat, data: &T, rows: &[FieldRow]) -> String {
    match format {
        OutputFormat::Table => format_table(rows),
        OutputFormat::Json => format_json(data),
    }
}

pub fn verification_rows(result: &VerificationResult) -> Vec<FieldRow> {
    vec![
        FieldRow::new("Transaction", result.transaction_id.as_str()),
        FieldRow::new(
            "Authentic",
            if result.is_authentic { "yes" } else { "NO" },
        ),
        FieldRow::new("Confidence", result.confidence.as_str()),
        FieldRow::new("Medicine", result.medicine_name.as_str()),
        FieldRow::new("Manufacturer", result.manufacturer.as_str()),
        FieldRow::new("Batch", result.batch_number.as_str()),
        FieldRow::new("Produced", result.production_date.as_str()),
        FieldRow::new("Expires", result.expiry_date.as_str()),
        FieldRow::new("Method", result.verification_method.as_str()),
    ]
}

pub fn record_rows(record: &BlockchainRecord) -> Vec<FieldRow> {
    let previous = if record.previous_owners.is_empty() {
        "(none)".to_string()
    } else {
        record.previous_owners.join(", ")
    };
    vec![
        FieldRow::new("Tx hash", record.transaction_hash.as_str()),
        FieldRow::new("Block", record.block_number.as_str()),
        FieldRow::new("Timestamp", record.timestamp.as_str()),
        FieldRow::new("Owner", record.owner_address.as_str()),
        FieldRow::new("Manufacturer", record.manufacturer_address.as_str()),
        FieldRow::new("Previous owners", previous),
    ]
}

pub fn ack_rows(ack: &ReportAck) -> Vec<FieldRow> {
    vec![FieldRow::new("Success", ack.success.to_string())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use medimock_core::{FixedRandom, VerificationMethod};

    #[test]
    fn test_verification_rows() {
        let source = FixedRandom::new(vec![0.1, 0.5]);
        let result = VerificationResult::generate(VerificationMethod::Qr, &source);
        let rows = verification_rows(&result);
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[1], FieldRow::new("Authentic", "NO"));
        assert_eq!(rows[2], FieldRow::new("Confidence", "0.7500"));
        assert_eq!(rows[8], FieldRow::new("Method", "qr"));
    }

    #[test]
    fn test_record_rows_mark_empty_owners() {
        let rows = record_rows(&BlockchainRecord::canned());
        assert_eq!(rows[5], FieldRow::new("Previous owners", "(none)"));
    }

    #[test]
    fn test_render_json() {
        let ack = ReportAck::ok();
        let out = render(&OutputFormat::Json, &ack, &ack_rows(&ack));
        assert_eq!(out, "{\n  \"success\": true\n}");
    }

    #[test]
    fn test_render_table_contains_values() {
        let record = BlockchainRecord::canned();
        let out = render(&OutputFormat::Table, &record, &record_rows(&record));
        assert!(out.contains("Tx hash"));
        assert!(out.contains("0xabcd1234efgh5678"));
    }
}
