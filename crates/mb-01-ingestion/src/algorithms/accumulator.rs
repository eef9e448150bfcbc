//! Key-accumulating transaction grouping
//!
//! Detail rows arrive in chunks. Grouping state lives in an open map keyed by
//! transaction key and survives chunk boundaries, so rows for one key are
//! always folded into a single `Transaction` no matter where the input was
//! split.
//!
//! With `KeyOrder::Clustered`, every open key other than the most recently
//! seen one is closed at a chunk boundary, which caps the open map at the
//! keys actually straddling the boundary. A closed key that reappears is
//! merged back into its closed transaction.

use crate::config::KeyOrder;
use shared_types::{ItemId, Transaction, TransactionKey};
use std::collections::HashMap;

/// Accumulates detail rows into transactions across chunks.
#[derive(Debug)]
pub struct TransactionAccumulator {
    key_order: KeyOrder,
    /// Keys that may still receive rows
    open: HashMap<TransactionKey, Vec<ItemId>>,
    /// Most recently pushed key (stays open at a boundary)
    last_key: Option<TransactionKey>,
    /// Transactions closed at earlier boundaries
    closed: Vec<Transaction>,
    /// Position of each closed key in `closed`
    closed_index: HashMap<TransactionKey, usize>,
    late_rows: usize,
    peak_open_keys: usize,
}

impl TransactionAccumulator {
    pub fn new(key_order: KeyOrder) -> Self {
        Self {
            key_order,
            open: HashMap::new(),
            last_key: None,
            closed: Vec::new(),
            closed_index: HashMap::new(),
            late_rows: 0,
            peak_open_keys: 0,
        }
    }

    /// Add one joined detail row.
    pub fn push(&mut self, key: TransactionKey, item: ItemId) {
        if let Some(&idx) = self.closed_index.get(&key) {
            self.closed[idx].items.push(item);
            self.late_rows += 1;
            return;
        }

        if self.last_key.as_ref() != Some(&key) {
            self.last_key = Some(key.clone());
        }
        self.open.entry(key).or_default().push(item);
    }

    /// Chunk boundary checkpoint.
    pub fn end_chunk(&mut self) {
        if self.key_order == KeyOrder::Clustered {
            let carry = self
                .last_key
                .as_ref()
                .and_then(|key| self.open.remove_entry(key));

            for (key, items) in self.open.drain() {
                self.closed_index.insert(key.clone(), self.closed.len());
                self.closed.push(Transaction::new(key, items));
            }

            if let Some((key, items)) = carry {
                self.open.insert(key, items);
            }
        }

        self.peak_open_keys = self.peak_open_keys.max(self.open.len());
    }

    pub fn open_keys(&self) -> usize {
        self.open.len()
    }

    /// Rows merged into transactions closed at an earlier boundary.
    pub fn late_rows(&self) -> usize {
        self.late_rows
    }

    /// Largest open map observed at a chunk boundary.
    pub fn peak_open_keys(&self) -> usize {
        self.peak_open_keys
    }

    /// Close every remaining key and return all transactions ordered by key.
    pub fn finish(mut self) -> Vec<Transaction> {
        for (key, items) in self.open.drain() {
            self.closed.push(Transaction::new(key, items));
        }
        self.closed.sort_by(|a, b| a.key.cmp(&b.key));
        self.closed
    }
}
