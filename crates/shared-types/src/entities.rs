//! # Core Domain Entities
//!
//! Defines the market-basket data model.
//!
//! ## Clusters
//!
//! - **Identity**: `ItemId`, `TransactionKey`
//! - **Input**: `Transaction` (raw, possibly with duplicate items)
//! - **Mining**: `ItemSet`, `FrequentItemset`
//! - **Rules & Queries**: `AssociationRule`, `Recommendation`

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// Canonical item identifier.
///
/// Constructed through normalization: surrounding whitespace is trimmed and
/// ASCII letters are uppercased, so `" sku-1 "` and `"SKU-1"` are one item.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Normalize a raw identifier. The result may be empty.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_ascii_uppercase())
    }

    /// Normalize a raw identifier, rejecting values that are blank.
    pub fn parse(raw: &str) -> Option<Self> {
        let id = Self::new(raw);
        if id.0.is_empty() {
            None
        } else {
            Some(id)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key joining header and detail records of one purchase (trimmed, case kept).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionKey(String);

impl TransactionKey {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TransactionKey {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for TransactionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// CLUSTER B: INPUT
// =============================================================================

/// A purchase as produced by ingestion.
///
/// Items keep source order and may repeat (one detail row per line item).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Join key shared by the header and detail rows.
    pub key: TransactionKey,
    /// Normalized item identifiers in source order.
    pub items: Vec<ItemId>,
}

impl Transaction {
    pub fn new(key: TransactionKey, items: Vec<ItemId>) -> Self {
        Self { key, items }
    }

    /// Number of raw line items, duplicates included.
    pub fn basket_size(&self) -> usize {
        self.items.len()
    }

    /// Deduplicated canonical view of the basket.
    pub fn item_set(&self) -> ItemSet {
        ItemSet::from_items(self.items.iter().cloned())
    }
}

// =============================================================================
// CLUSTER C: MINING
// =============================================================================

/// A set of distinct items in canonical (sorted) form.
///
/// Ordering is lexical over the sorted members, which is the tie-break order
/// used by every sorted output in the workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemSet(Vec<ItemId>);

impl ItemSet {
    /// Build the canonical form of any collection of items.
    pub fn from_items<I: IntoIterator<Item = ItemId>>(items: I) -> Self {
        let mut items: Vec<ItemId> = items.into_iter().collect();
        items.sort();
        items.dedup();
        Self(items)
    }

    pub fn single(item: ItemId) -> Self {
        Self(vec![item])
    }

    pub fn items(&self) -> &[ItemId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ItemId> {
        self.0.iter()
    }

    pub fn contains(&self, item: &ItemId) -> bool {
        self.0.binary_search(item).is_ok()
    }

    /// Subset test by merge walk over both sorted member lists.
    pub fn is_subset_of(&self, other: &ItemSet) -> bool {
        let mut theirs = other.0.iter();
        'outer: for mine in &self.0 {
            for candidate in theirs.by_ref() {
                match candidate.cmp(mine) {
                    std::cmp::Ordering::Less => continue,
                    std::cmp::Ordering::Equal => continue 'outer,
                    std::cmp::Ordering::Greater => return false,
                }
            }
            return false;
        }
        true
    }

    /// At least one shared member.
    pub fn intersects(&self, other: &ItemSet) -> bool {
        self.0.iter().any(|item| other.contains(item))
    }

    /// Members of `self` not in `other`.
    pub fn difference(&self, other: &ItemSet) -> ItemSet {
        ItemSet(
            self.0
                .iter()
                .filter(|item| !other.contains(item))
                .cloned()
                .collect(),
        )
    }

    pub fn into_vec(self) -> Vec<ItemId> {
        self.0
    }
}

impl FromIterator<ItemId> for ItemSet {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<'a> IntoIterator for &'a ItemSet {
    type Item = &'a ItemId;
    type IntoIter = std::slice::Iter<'a, ItemId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ItemSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(item.as_str())?;
        }
        f.write_str("}")
    }
}

/// An itemset whose support met the mining threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequentItemset {
    /// Canonical members.
    pub items: ItemSet,
    /// Number of transactions containing every member.
    pub count: u64,
    /// `count / total_transactions`, divided once from exact counts.
    pub support: f64,
}

impl FrequentItemset {
    pub fn new(items: ItemSet, count: u64, total_transactions: u64) -> Self {
        let support = if total_transactions == 0 {
            0.0
        } else {
            count as f64 / total_transactions as f64
        };
        Self {
            items,
            count,
            support,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// CLUSTER D: RULES & QUERIES
// =============================================================================

/// An `antecedent → consequent` implication between disjoint itemsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationRule {
    pub antecedent: ItemSet,
    pub consequent: ItemSet,
    /// Support of the antecedent alone.
    pub antecedent_support: f64,
    /// Support of the consequent alone.
    pub consequent_support: f64,
    /// Support of `antecedent ∪ consequent`.
    pub support: f64,
    /// `support(A ∪ C) / support(A)`, in `[0, 1]`.
    pub confidence: f64,
    /// `confidence / support(C)`, non-negative.
    pub lift: f64,
}

/// One recommended item and the strength of the rule that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub item: ItemId,
    pub confidence: f64,
    pub lift: f64,
    pub support: f64,
}
