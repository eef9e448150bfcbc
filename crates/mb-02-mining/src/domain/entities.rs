//! Core entities for Association Mining

use serde::{Deserialize, Serialize};
use shared_types::{ItemId, ItemSet};

/// Dense item code. Code order equals lexical order of the item ids.
pub type ItemCode = u32;

/// Every distinct item observed in one training run, sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemUniverse {
    items: Vec<ItemId>,
}

impl ItemUniverse {
    /// Union of all members of `itemsets`.
    pub fn from_itemsets(itemsets: &[ItemSet]) -> Self {
        let mut items: Vec<ItemId> = itemsets.iter().flat_map(|s| s.iter().cloned()).collect();
        items.sort();
        items.dedup();
        Self { items }
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &ItemId) -> bool {
        self.code(item).is_some()
    }

    pub fn code(&self, item: &ItemId) -> Option<ItemCode> {
        self.items
            .binary_search(item)
            .ok()
            .map(|idx| idx as ItemCode)
    }

    pub fn item(&self, code: ItemCode) -> &ItemId {
        &self.items[code as usize]
    }

    /// Translate sorted codes back into a canonical itemset.
    pub fn decode(&self, codes: &[ItemCode]) -> ItemSet {
        ItemSet::from_items(codes.iter().map(|&c| self.item(c).clone()))
    }
}

/// Transactions as sorted, deduplicated item-code lists.
#[derive(Clone, Debug, Default)]
pub struct EncodedDatabase {
    pub universe: ItemUniverse,
    pub baskets: Vec<Vec<ItemCode>>,
}

impl EncodedDatabase {
    pub fn from_itemsets(itemsets: &[ItemSet]) -> Self {
        let universe = ItemUniverse::from_itemsets(itemsets);
        let baskets = itemsets
            .iter()
            .map(|set| {
                // Every member is in the universe and itemsets are sorted,
                // so the codes come out sorted as well.
                set.iter().filter_map(|item| universe.code(item)).collect()
            })
            .collect();
        Self { universe, baskets }
    }

    pub fn transaction_count(&self) -> u64 {
        self.baskets.len() as u64
    }

    /// Drop codes not marked in `keep`, and baskets left shorter than `min_len`.
    pub fn retain_items(&mut self, keep: &[bool], min_len: usize) {
        for basket in &mut self.baskets {
            basket.retain(|&code| keep[code as usize]);
        }
        self.baskets.retain(|basket| basket.len() >= min_len);
    }
}
