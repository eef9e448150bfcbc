//! Item Encoder
//!
//! Turns raw transactions into canonical per-transaction itemsets plus the
//! item universe. No filtering happens here; rare items are the miner's job.

use crate::domain::entities::ItemUniverse;
use shared_types::{ItemSet, Transaction};

/// Deduplicate each transaction and collect the universe of items.
pub fn encode(transactions: &[Transaction]) -> (ItemUniverse, Vec<ItemSet>) {
    let itemsets: Vec<ItemSet> = transactions.iter().map(Transaction::item_set).collect();
    let universe = ItemUniverse::from_itemsets(&itemsets);
    (universe, itemsets)
}
