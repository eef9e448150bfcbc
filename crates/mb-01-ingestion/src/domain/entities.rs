//! Ingestion outcome entities

use serde::{Deserialize, Serialize};
use shared_types::Transaction;

/// Counters describing one ingestion run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestStats {
    /// Header rows read (after sampling)
    pub header_rows: usize,
    /// Distinct transaction keys in the header source
    pub header_keys: usize,
    /// Detail rows read (after sampling)
    pub detail_rows: usize,
    /// Detail rows whose key matched a header
    pub joined_rows: usize,
    /// Detail rows dropped for lack of a matching header
    pub orphan_rows: usize,
    /// Detail rows skipped because the item id was blank
    pub blank_item_rows: usize,
    /// Detail rows merged into a transaction already closed at a chunk boundary
    pub late_rows: usize,
    /// Detail chunks processed
    pub chunks: usize,
    /// Largest number of open keys carried across a chunk boundary
    pub peak_open_keys: usize,
}

/// Result of a successful ingestion run.
#[derive(Clone, Debug)]
pub struct IngestOutcome {
    /// One transaction per joined key, ordered by key
    pub transactions: Vec<Transaction>,
    pub stats: IngestStats,
}

impl IngestOutcome {
    /// Mean raw line items per transaction (0 when empty).
    pub fn average_basket_size(&self) -> f64 {
        if self.transactions.is_empty() {
            return 0.0;
        }
        let total: usize = self.transactions.iter().map(|t| t.basket_size()).sum();
        total as f64 / self.transactions.len() as f64
    }
}
