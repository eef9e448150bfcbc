//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::ItemUniverse;
use crate::domain::errors::MiningError;
use shared_types::{
    AssociationRule, CancellationToken, FrequentItemset, ItemId, ItemSet, Recommendation,
    Transaction,
};

/// Primary Association Mining API
pub trait AssociationMiningApi: Send + Sync {
    /// Collapse each transaction to its distinct items and collect the
    /// universe of items seen.
    fn encode(&self, transactions: &[Transaction]) -> (ItemUniverse, Vec<ItemSet>);

    /// Find every itemset of at most `max_size` items whose support meets
    /// `min_support`.
    ///
    /// Fails with `InvalidParameter` when `min_support` is outside (0, 1] or
    /// `max_size` is zero, and with `Cancelled` when `cancel` trips between
    /// levels.
    fn mine(
        &self,
        itemsets: &[ItemSet],
        min_support: f64,
        max_size: usize,
        cancel: &CancellationToken,
    ) -> Result<Vec<FrequentItemset>, MiningError>;

    /// Split frequent itemsets into rules meeting `min_confidence`.
    fn generate_rules(
        &self,
        frequent: &[FrequentItemset],
        min_confidence: f64,
    ) -> Result<Vec<AssociationRule>, MiningError>;

    /// Rank consequent items of rules whose antecedent overlaps `query`.
    fn recommend(
        &self,
        query: &[ItemId],
        rules: &[AssociationRule],
        top_n: usize,
    ) -> Vec<Recommendation>;
}
