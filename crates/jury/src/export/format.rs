//! ExportFormat trait definition

use tracing::debug;

use crate::error::{Error, Result};
use crate::record::Record;

/// Trait for export format implementations
///
/// Column order for a whole export is the field order of the first record.
/// Later records are projected onto those columns: a missing field becomes
/// an empty value and extra fields are ignored.
pub trait ExportFormat {
    /// Returns the header line for the format (`None` for formats without headers)
    fn header(&self, columns: &[String]) -> Option<String>;

    /// Format a single record projected onto `columns`
    fn format_row(&self, columns: &[String], record: &dyn Record) -> String;

    /// Format multiple records, one line each, joined by newlines.
    ///
    /// Fails with [`Error::EmptyExport`] when there is no record to derive
    /// the columns from.
    fn format_rows<R: Record>(&self, records: &[R]) -> Result<String>
    where
        Self: Sized,
    {
        let first = records.first().ok_or(Error::EmptyExport)?;
        let columns = first.field_names();

        let mut lines = Vec::with_capacity(records.len() + 1);
        if let Some(header) = self.header(&columns) {
            lines.push(header);
        }
        for record in records {
            lines.push(self.format_row(&columns, record));
        }

        debug!(
            "Formatted {} record(s) across {} column(s)",
            records.len(),
            columns.len()
        );
        Ok(lines.join("\n"))
    }
}
