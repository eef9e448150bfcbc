//! Apriori frequent-itemset mining
//!
//! Level-wise, breadth-first:
//! 1. Count singletons, keep those meeting `min_support`
//! 2. Join level k into (k+1)-candidates, pruning any with an infrequent k-subset
//! 3. Count surviving candidates in one scan, keep those meeting `min_support`
//! 4. Stop when a level comes back empty or `max_size` is reached
//!
//! Cancellation is observed between levels only; a level is never reported
//! until its full counting pass has finished.

use crate::algorithms::candidates::generate_candidates;
use crate::algorithms::counting::{count_candidates, count_items};
use crate::algorithms::rules::MAX_RULE_ITEMSET_LEN;
use crate::config::MiningConfig;
use crate::domain::entities::{EncodedDatabase, ItemCode};
use crate::domain::errors::MiningError;
use shared_types::{CancellationToken, FrequentItemset, ItemSet};
use tracing::{debug, info};

/// Check `min_support` ∈ (0, 1] and 1 ≤ `max_size` ≤ `MAX_RULE_ITEMSET_LEN`.
pub fn validate_mining_parameters(min_support: f64, max_size: usize) -> Result<(), MiningError> {
    if !(min_support > 0.0 && min_support <= 1.0) {
        return Err(MiningError::invalid(
            "min_support",
            format!("{} is outside (0, 1]", min_support),
        ));
    }
    if max_size < 1 {
        return Err(MiningError::invalid("max_size", "must be at least 1"));
    }
    if max_size > MAX_RULE_ITEMSET_LEN {
        return Err(MiningError::invalid(
            "max_size",
            format!("{} exceeds the rule limit of {}", max_size, MAX_RULE_ITEMSET_LEN),
        ));
    }
    Ok(())
}

/// Mine with default configuration and no cancellation.
pub fn mine_frequent_itemsets(
    itemsets: &[ItemSet],
    min_support: f64,
    max_size: usize,
) -> Result<Vec<FrequentItemset>, MiningError> {
    mine_with_cancel(itemsets, min_support, max_size, &CancellationToken::new())
}

/// Mine with default configuration, aborting between levels once `cancel` trips.
pub fn mine_with_cancel(
    itemsets: &[ItemSet],
    min_support: f64,
    max_size: usize,
    cancel: &CancellationToken,
) -> Result<Vec<FrequentItemset>, MiningError> {
    AprioriMiner::new(MiningConfig::default()).mine(itemsets, min_support, max_size, cancel)
}

/// Level-wise Apriori miner.
pub struct AprioriMiner {
    config: MiningConfig,
}

impl AprioriMiner {
    pub fn new(config: MiningConfig) -> Self {
        Self { config }
    }

    /// All itemsets of at most `max_size` items whose support meets
    /// `min_support`, ordered by support descending then canonical itemset.
    pub fn mine(
        &self,
        itemsets: &[ItemSet],
        min_support: f64,
        max_size: usize,
        cancel: &CancellationToken,
    ) -> Result<Vec<FrequentItemset>, MiningError> {
        validate_mining_parameters(min_support, max_size)?;

        if itemsets.is_empty() {
            debug!("[mb-02] No transactions to mine");
            return Ok(Vec::new());
        }

        let mut db = EncodedDatabase::from_itemsets(itemsets);
        let total = db.transaction_count();
        let is_frequent = |count: u64| count as f64 / total as f64 >= min_support;

        // Level 1
        let item_counts = count_items(
            &db.baskets,
            db.universe.len(),
            self.config.parallel_threshold,
            self.config.count_chunk_size,
        );
        let keep: Vec<bool> = item_counts.iter().map(|&c| is_frequent(c)).collect();

        let mut level: Vec<(Vec<ItemCode>, u64)> = item_counts
            .iter()
            .enumerate()
            .filter(|(code, _)| keep[*code])
            .map(|(code, &count)| (vec![code as ItemCode], count))
            .collect();

        debug!(
            level = 1,
            candidates = db.universe.len(),
            frequent = level.len(),
            "[mb-02] Level counted"
        );

        let mut mined: Vec<(Vec<ItemCode>, u64)> = level.clone();
        let mut completed_levels = 1;

        // Items that failed level 1 can never appear in a frequent superset
        db.retain_items(&keep, 2);

        while !level.is_empty() && completed_levels < max_size {
            if cancel.is_cancelled() {
                info!(completed_levels, "[mb-02] Mining cancelled");
                return Err(MiningError::Cancelled { completed_levels });
            }

            let k = completed_levels + 1;
            let parents: Vec<Vec<ItemCode>> = level.into_iter().map(|(codes, _)| codes).collect();
            let generated = generate_candidates(&parents);
            if generated.candidates.is_empty() {
                debug!(level = k, pruned = generated.pruned, "[mb-02] No candidates");
                break;
            }

            let counts = count_candidates(
                &db.baskets,
                &generated.candidates,
                k,
                self.config.parallel_threshold,
                self.config.count_chunk_size,
            );

            level = generated
                .candidates
                .into_iter()
                .zip(counts)
                .filter(|(_, count)| is_frequent(*count))
                .collect();

            debug!(
                level = k,
                pruned = generated.pruned,
                frequent = level.len(),
                "[mb-02] Level counted"
            );

            mined.extend(level.iter().cloned());
            completed_levels = k;
            db.baskets.retain(|basket| basket.len() > k);
        }

        let mut result: Vec<FrequentItemset> = mined
            .into_iter()
            .map(|(codes, count)| FrequentItemset::new(db.universe.decode(&codes), count, total))
            .collect();

        // Same denominator everywhere: ordering by count is ordering by support
        result.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.items.cmp(&b.items)));

        info!(
            transactions = total,
            items = db.universe.len(),
            frequent_itemsets = result.len(),
            levels = completed_levels,
            "[mb-02] Frequent itemset mining complete"
        );

        Ok(result)
    }
}
