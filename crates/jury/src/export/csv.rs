//! CSV export format implementation

use crate::error::Result;
use crate::record::{FieldValue, Record, ScoreRecord};

use super::format::ExportFormat;

/// File name offered for the score export
pub const CSV_FILE_NAME: &str = "scores.csv";

/// MIME type of the score export
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8";

/// Columns whose text values are always quoted
pub const FREE_TEXT_COLUMNS: [&str; 2] = [ScoreRecord::POSTER_TITLE, ScoreRecord::COMMENT];

/// CSV exporter.
///
/// Text values have embedded double quotes doubled and are wrapped in
/// quotes when the column is free text or the value contains a comma, a
/// double quote or a newline. Other values are written unquoted in their
/// default string form.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

impl ExportFormat for CsvExporter {
    fn header(&self, columns: &[String]) -> Option<String> {
        Some(columns.join(","))
    }

    fn format_row(&self, columns: &[String], record: &dyn Record) -> String {
        columns
            .iter()
            .map(|column| match record.field(column) {
                Some(value) => format_cell(column, &value),
                None => String::new(),
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Encode a cell value for `column`
pub fn format_cell(column: &str, value: &FieldValue) -> String {
    match value {
        FieldValue::Text(text) => {
            let escaped = text.replace('"', "\"\"");
            if FREE_TEXT_COLUMNS.contains(&column) || needs_quotes(&escaped) {
                format!("\"{}\"", escaped)
            } else {
                escaped
            }
        }
        other => other.to_string(),
    }
}

fn needs_quotes(text: &str) -> bool {
    text.contains([',', '"', '\n'])
}

/// Encode records as CSV text with a single header row
pub fn encode_csv<R: Record>(records: &[R]) -> Result<String> {
    CsvExporter.format_rows(records)
}
