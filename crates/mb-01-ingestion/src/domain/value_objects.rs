//! Value objects for Transaction Ingestion

use crate::domain::errors::IngestError;

/// Position of a named column inside a source's header row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnIndex(pub usize);

impl ColumnIndex {
    /// Locate `column` (trimmed, case-sensitive) in `columns`.
    pub fn resolve(
        source_name: &str,
        columns: &[String],
        column: &str,
    ) -> Result<Self, IngestError> {
        columns
            .iter()
            .position(|c| c.trim() == column)
            .map(ColumnIndex)
            .ok_or_else(|| IngestError::Schema {
                source_name: source_name.to_string(),
                column: column.to_string(),
            })
    }

    /// Fetch this column's field from a row.
    pub fn field<'a>(
        &self,
        source_name: &str,
        row_number: usize,
        row: &'a [String],
    ) -> Result<&'a str, IngestError> {
        row.get(self.0).map(String::as_str).ok_or_else(|| {
            IngestError::data_source(
                source_name,
                format!(
                    "row {} has {} fields, expected at least {}",
                    row_number,
                    row.len(),
                    self.0 + 1
                ),
            )
        })
    }
}
