//! Rule-based recommendation
//!
//! A rule matches when its antecedent shares at least one item with the
//! query (full containment is not required). Consequent items missing from
//! the query become candidates carrying the rule's strength. Candidates are
//! ranked by confidence then lift, and an item keeps only its best-ranked
//! occurrence.

use shared_types::{AssociationRule, ItemId, ItemSet, Recommendation};
use std::collections::HashSet;

/// Up to `top_n` recommended items for `query`, strongest first.
pub fn recommend(query: &[ItemId], rules: &[AssociationRule], top_n: usize) -> Vec<Recommendation> {
    if top_n == 0 || query.is_empty() {
        return Vec::new();
    }
    let query = ItemSet::from_items(query.iter().cloned());

    let mut candidates: Vec<Recommendation> = rules
        .iter()
        .filter(|rule| rule.antecedent.intersects(&query))
        .flat_map(|rule| {
            rule.consequent
                .iter()
                .filter(|item| !query.contains(item))
                .map(|item| Recommendation {
                    item: item.clone(),
                    confidence: rule.confidence,
                    lift: rule.lift,
                    support: rule.support,
                })
        })
        .collect();

    // Stable: equal-strength candidates keep rule order
    candidates.sort_by(|a, b| {
        b.confidence
            .total_cmp(&a.confidence)
            .then_with(|| b.lift.total_cmp(&a.lift))
    });

    let mut seen = HashSet::new();
    candidates.retain(|rec| seen.insert(rec.item.clone()));
    candidates.truncate(top_n);
    candidates
}
