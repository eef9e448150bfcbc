//! Error types for Transaction Ingestion

use thiserror::Error;

/// All errors that can occur while ingesting transactions
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source missing, unreadable, or malformed
    #[error("Data source error in {source_name}: {reason}")]
    DataSource { source_name: String, reason: String },

    /// Required join or item column absent
    #[error("Schema error in {source_name}: missing column '{column}'")]
    Schema { source_name: String, column: String },

    /// Ingestion options out of range
    #[error("Invalid ingestion options: {0}")]
    InvalidOptions(String),

    /// Cancelled between chunks
    #[error("Ingestion cancelled")]
    Cancelled,
}

impl IngestError {
    pub fn data_source(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DataSource {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}
