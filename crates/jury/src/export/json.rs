//! JSON export format implementation

use serde_json::{Map, Value as JsonValue};

use crate::error::Result;
use crate::record::{FieldValue, Record};

use super::format::ExportFormat;

/// MIME type of the NDJSON export
pub const NDJSON_MIME_TYPE: &str = "application/x-ndjson";

/// JSON exporter (one object per line, NDJSON format)
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl ExportFormat for JsonExporter {
    fn header(&self, _columns: &[String]) -> Option<String> {
        None // JSON doesn't need a header
    }

    fn format_row(&self, columns: &[String], record: &dyn Record) -> String {
        format_json_entry(columns, record).to_string()
    }
}

/// Build a JSON object holding `columns` of a record, in column order
pub fn format_json_entry(columns: &[String], record: &dyn Record) -> JsonValue {
    let mut object = Map::new();
    for column in columns {
        let value = record
            .field(column)
            .map(|v| field_to_json(&v))
            .unwrap_or(JsonValue::Null);
        object.insert(column.clone(), value);
    }
    JsonValue::Object(object)
}

fn field_to_json(value: &FieldValue) -> JsonValue {
    match value {
        FieldValue::Text(s) => JsonValue::from(s.as_str()),
        FieldValue::Integer(i) => JsonValue::from(*i),
        FieldValue::Float(f) => JsonValue::from(*f),
        FieldValue::Bool(b) => JsonValue::from(*b),
        FieldValue::Null => JsonValue::Null,
    }
}

/// Encode records as newline-delimited JSON
pub fn encode_ndjson<R: Record>(records: &[R]) -> Result<String> {
    JsonExporter.format_rows(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ScoreRecord;

    #[test]
    fn test_ndjson_line_per_record() {
        let record = ScoreRecord {
            timestamp: "2024-05-01 09:00:00".to_string(),
            judge: "Anonymous".to_string(),
            poster_title: "Protein Folding".to_string(),
            scientific_clarity: 1,
            data_presentation: 2,
            visual_design: 3,
            impact: 4,
            tiebreaker: 5,
            total: None,
            comment: None,
        };
        let output = encode_ndjson(&[record.clone(), record]).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: JsonValue = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed["Poster_Title"], "Protein Folding");
        assert_eq!(parsed["Total"], 15);
        assert_eq!(parsed["Comment"], JsonValue::Null);
        assert!(lines[0].starts_with("{\"Timestamp\":"));
    }
}
