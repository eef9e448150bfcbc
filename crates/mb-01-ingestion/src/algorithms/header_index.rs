//! Header key index
//!
//! The header source is the smaller side of the join and is loaded whole;
//! only its transaction keys are retained.

use crate::domain::errors::IngestError;
use crate::domain::value_objects::ColumnIndex;
use crate::ports::outbound::RecordStream;
use shared_types::TransactionKey;
use std::collections::HashSet;

/// Set of transaction keys present in the header source.
#[derive(Debug, Default)]
pub struct HeaderKeyIndex {
    keys: HashSet<TransactionKey>,
    rows: usize,
}

impl HeaderKeyIndex {
    /// Read at most `limit` rows of `stream` and index their keys.
    pub fn load(
        source_name: &str,
        stream: RecordStream,
        key_column: &str,
        limit: Option<usize>,
    ) -> Result<Self, IngestError> {
        let key_idx = ColumnIndex::resolve(source_name, &stream.columns, key_column)?;
        let mut index = Self::default();

        let rows = stream.rows.take(limit.unwrap_or(usize::MAX));
        for (row_number, row) in rows.enumerate() {
            let row = row?;
            let key = TransactionKey::new(key_idx.field(source_name, row_number + 1, &row)?);
            index.rows += 1;
            if !key.as_str().is_empty() {
                index.keys.insert(key);
            }
        }

        Ok(index)
    }

    pub fn contains(&self, key: &TransactionKey) -> bool {
        self.keys.contains(key)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn key_count(&self) -> usize {
        self.keys.len()
    }
}
