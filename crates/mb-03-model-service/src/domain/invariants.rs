//! Domain invariants for the Model Service

use crate::domain::entities::TrainedModel;
use shared_types::ItemSet;
use std::collections::HashSet;

/// INVARIANT-1: Snapshot consistency
/// Every rule's antecedent, consequent and union are itemsets of the same
/// model, so itemsets and rules always come from one run.
pub fn invariant_snapshot_consistent(model: &TrainedModel) -> bool {
    let itemsets: HashSet<&ItemSet> = model.frequent_itemsets.iter().map(|fi| &fi.items).collect();
    model.rules.iter().all(|rule| {
        let union: ItemSet = rule
            .antecedent
            .iter()
            .chain(rule.consequent.iter())
            .cloned()
            .collect();
        itemsets.contains(&rule.antecedent)
            && itemsets.contains(&rule.consequent)
            && itemsets.contains(&union)
    })
}

/// INVARIANT-2: Support bounds
/// Every itemset support lies in (0, 1] and matches its count.
pub fn invariant_support_bounds(model: &TrainedModel) -> bool {
    model.frequent_itemsets.iter().all(|fi| {
        fi.support > 0.0
            && fi.support <= 1.0
            && fi.count <= model.transaction_count
            && fi.count as f64 / model.transaction_count as f64 == fi.support
    })
}
