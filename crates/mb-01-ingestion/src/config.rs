//! Configuration for Transaction Ingestion

use crate::domain::errors::IngestError;
use serde::{Deserialize, Serialize};

/// How detail rows for one transaction key are laid out in the input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyOrder {
    /// Rows for a key may appear anywhere; every key stays open until the end.
    #[default]
    Unordered,
    /// Rows for a key are contiguous; keys are closed at chunk boundaries.
    Clustered,
}

/// Ingestion options
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestOptions {
    /// Column holding the transaction key in both sources
    pub key_column: String,
    /// Column holding the item identifier in the detail source
    pub item_column: String,
    /// Detail rows processed per chunk
    pub chunk_size: usize,
    /// Cap on rows read from each source (deterministic prefix)
    pub sample_limit: Option<usize>,
    /// Layout of detail rows per key
    pub key_order: KeyOrder,
}

impl IngestOptions {
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_sample_limit(mut self, limit: Option<usize>) -> Self {
        self.sample_limit = limit;
        self
    }

    pub fn with_key_order(mut self, key_order: KeyOrder) -> Self {
        self.key_order = key_order;
        self
    }

    pub fn validate(&self) -> Result<(), IngestError> {
        if self.chunk_size == 0 {
            return Err(IngestError::InvalidOptions(
                "chunk_size must be at least 1".to_string(),
            ));
        }
        if self.key_column.trim().is_empty() || self.item_column.trim().is_empty() {
            return Err(IngestError::InvalidOptions(
                "key and item column names must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            key_column: "voucher_id".to_string(),
            item_column: "item_no".to_string(),
            chunk_size: 200_000,
            sample_limit: None,
            key_order: KeyOrder::Unordered,
        }
    }
}
