//! Association rule generation
//!
//! Every frequent itemset of two or more items is split into each non-empty
//! proper subset (antecedent) and its complement (consequent). Both sides are
//! frequent by anti-monotonicity, so their supports are looked up among the
//! mined itemsets instead of recounted.

use crate::domain::errors::MiningError;
use shared_types::{AssociationRule, FrequentItemset, ItemSet};
use std::collections::HashMap;
use tracing::{debug, info};

/// Largest itemset split into rules; 2^n subsets are enumerated per itemset.
/// Mining never produces larger itemsets, see `validate_mining_parameters`.
pub const MAX_RULE_ITEMSET_LEN: usize = 24;

/// Check `min_confidence` ∈ [0, 1].
pub fn validate_min_confidence(min_confidence: f64) -> Result<(), MiningError> {
    if !(0.0..=1.0).contains(&min_confidence) {
        return Err(MiningError::invalid(
            "min_confidence",
            format!("{} is outside [0, 1]", min_confidence),
        ));
    }
    Ok(())
}

/// Derive all rules with confidence ≥ `min_confidence`.
///
/// Output is ordered by confidence descending, then lift descending, then
/// canonical antecedent and consequent order.
pub fn generate_rules(
    frequent: &[FrequentItemset],
    min_confidence: f64,
) -> Result<Vec<AssociationRule>, MiningError> {
    validate_min_confidence(min_confidence)?;

    let by_items: HashMap<&ItemSet, &FrequentItemset> =
        frequent.iter().map(|fi| (&fi.items, fi)).collect();
    let lookup = |side: &ItemSet| {
        by_items.get(side).copied().ok_or_else(|| {
            MiningError::invalid(
                "frequent_itemsets",
                format!("not downward closed: no support for {}", side),
            )
        })
    };

    let mut rules = Vec::new();
    let mut considered = 0usize;

    for itemset in frequent.iter().filter(|fi| fi.len() >= 2) {
        let n = itemset.len();
        if n > MAX_RULE_ITEMSET_LEN {
            return Err(MiningError::invalid(
                "frequent_itemsets",
                format!(
                    "itemset of {} items exceeds the rule limit of {}",
                    n, MAX_RULE_ITEMSET_LEN
                ),
            ));
        }

        let members = itemset.items.items();
        for mask in 1u32..(1u32 << n) - 1 {
            let (antecedent, consequent): (Vec<_>, Vec<_>) = members
                .iter()
                .enumerate()
                .partition(|(i, _)| mask & (1 << *i) != 0);
            let antecedent: ItemSet = antecedent.into_iter().map(|(_, item)| item.clone()).collect();
            let consequent: ItemSet = consequent.into_iter().map(|(_, item)| item.clone()).collect();
            considered += 1;

            let ante = lookup(&antecedent)?;
            let cons = lookup(&consequent)?;
            if ante.count == 0 {
                continue;
            }

            // Exact ratio of counts: support(A ∪ C) / support(A)
            let confidence = itemset.count as f64 / ante.count as f64;
            if confidence < min_confidence {
                continue;
            }
            let lift = if cons.support > 0.0 {
                confidence / cons.support
            } else {
                0.0
            };

            rules.push(AssociationRule {
                antecedent,
                consequent,
                antecedent_support: ante.support,
                consequent_support: cons.support,
                support: itemset.support,
                confidence,
                lift,
            });
        }
    }

    sort_rules(&mut rules);

    debug!(considered, "[mb-02] Candidate rules considered");
    info!(
        rules = rules.len(),
        min_confidence, "[mb-02] Association rule generation complete"
    );

    Ok(rules)
}

/// Confidence desc, lift desc, antecedent asc, consequent asc.
pub fn sort_rules(rules: &mut [AssociationRule]) {
    rules.sort_by(|a, b| {
        b.confidence
            .total_cmp(&a.confidence)
            .then_with(|| b.lift.total_cmp(&a.lift))
            .then_with(|| a.antecedent.cmp(&b.antecedent))
            .then_with(|| a.consequent.cmp(&b.consequent))
    });
}
