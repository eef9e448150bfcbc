//! Outbound Ports (Driven Ports / SPI)

use crate::domain::errors::IngestError;

/// One record as a list of raw string fields.
pub type RecordRow = Vec<String>;

/// An opened record source: its column names and a fallible row stream.
pub struct RecordStream {
    pub columns: Vec<String>,
    pub rows: Box<dyn Iterator<Item = Result<RecordRow, IngestError>> + Send>,
}

impl std::fmt::Debug for RecordStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStream")
            .field("columns", &self.columns)
            .finish_non_exhaustive()
    }
}

/// Provider of raw header or detail records.
///
/// Implementations must report a missing or unreadable source as
/// `IngestError::DataSource` from `open`, and malformed rows as
/// `IngestError::DataSource` items of the row stream.
pub trait RecordSource: Send + Sync {
    /// Human-readable name used in errors and logs.
    fn name(&self) -> &str;

    /// Open a fresh pass over the records.
    fn open(&self) -> Result<RecordStream, IngestError>;
}
