//! Association Mining Service
//!
//! Main service implementing AssociationMiningApi.

use crate::algorithms::{self, AprioriMiner};
use crate::config::MiningConfig;
use crate::domain::entities::ItemUniverse;
use crate::domain::errors::MiningError;
use crate::domain::invariants::{
    invariant_anti_monotone, invariant_recommendation_exclusion, invariant_rule_bounds,
};
use crate::ports::inbound::AssociationMiningApi;
use shared_types::{
    AssociationRule, CancellationToken, FrequentItemset, ItemId, ItemSet, Recommendation,
    Transaction,
};
use tracing::debug;

/// Association Mining Service
///
/// Thin orchestration over the algorithms module. Invariants are checked in
/// debug builds after every call.
pub struct MiningService {
    config: MiningConfig,
}

impl MiningService {
    /// Create a new service with default config
    pub fn new() -> Self {
        Self {
            config: MiningConfig::default(),
        }
    }

    /// Create a new service with custom config
    pub fn with_config(config: MiningConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MiningConfig {
        &self.config
    }
}

impl Default for MiningService {
    fn default() -> Self {
        Self::new()
    }
}

impl AssociationMiningApi for MiningService {
    fn encode(&self, transactions: &[Transaction]) -> (ItemUniverse, Vec<ItemSet>) {
        let (universe, itemsets) = algorithms::encode(transactions);
        debug!(
            transactions = itemsets.len(),
            items = universe.len(),
            "[mb-02] Transactions encoded"
        );
        (universe, itemsets)
    }

    fn mine(
        &self,
        itemsets: &[ItemSet],
        min_support: f64,
        max_size: usize,
        cancel: &CancellationToken,
    ) -> Result<Vec<FrequentItemset>, MiningError> {
        let frequent =
            AprioriMiner::new(self.config.clone()).mine(itemsets, min_support, max_size, cancel)?;
        debug_assert!(invariant_anti_monotone(&frequent));
        Ok(frequent)
    }

    fn generate_rules(
        &self,
        frequent: &[FrequentItemset],
        min_confidence: f64,
    ) -> Result<Vec<AssociationRule>, MiningError> {
        let rules = algorithms::generate_rules(frequent, min_confidence)?;
        debug_assert!(invariant_rule_bounds(&rules));
        Ok(rules)
    }

    fn recommend(
        &self,
        query: &[ItemId],
        rules: &[AssociationRule],
        top_n: usize,
    ) -> Vec<Recommendation> {
        let recs = algorithms::recommend(query, rules, top_n);
        debug_assert!(invariant_recommendation_exclusion(
            &ItemSet::from_items(query.iter().cloned()),
            &recs
        ));
        recs
    }
}
