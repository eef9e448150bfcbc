//! Domain invariants for Association Mining

use shared_types::{AssociationRule, FrequentItemset, ItemSet, Recommendation};
use std::collections::HashMap;

const TOLERANCE: f64 = 1e-9;

/// INVARIANT-1: Anti-monotonicity
/// Every (k-1)-subset of a mined k-itemset was mined too, with support at
/// least as high.
pub fn invariant_anti_monotone(itemsets: &[FrequentItemset]) -> bool {
    let by_items: HashMap<&ItemSet, &FrequentItemset> =
        itemsets.iter().map(|fi| (&fi.items, fi)).collect();

    itemsets.iter().filter(|fi| fi.len() >= 2).all(|fi| {
        (0..fi.len()).all(|skip| {
            let subset: ItemSet = fi
                .items
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, item)| item.clone())
                .collect();
            by_items
                .get(&subset)
                .map(|sub| sub.count >= fi.count && sub.support >= fi.support)
                .unwrap_or(false)
        })
    })
}

/// INVARIANT-2: Rule bounds
/// Antecedent and consequent are non-empty and disjoint, confidence is in
/// `[0, 1]` and equals `support / antecedent_support`, lift is non-negative.
pub fn invariant_rule_bounds(rules: &[AssociationRule]) -> bool {
    rules.iter().all(|rule| {
        !rule.antecedent.is_empty()
            && !rule.consequent.is_empty()
            && !rule.antecedent.intersects(&rule.consequent)
            && (0.0..=1.0).contains(&rule.confidence)
            && rule.lift >= 0.0
            && rule.antecedent_support > 0.0
            && (rule.confidence - rule.support / rule.antecedent_support).abs() <= TOLERANCE
    })
}

/// INVARIANT-3: Recommendation exclusion
/// No recommended item was part of the query, and no item repeats.
pub fn invariant_recommendation_exclusion(query: &ItemSet, recs: &[Recommendation]) -> bool {
    let mut seen = std::collections::HashSet::new();
    recs.iter()
        .all(|rec| !query.contains(&rec.item) && seen.insert(rec.item.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ItemId;

    fn set(items: &[&str]) -> ItemSet {
        items.iter().map(|s| ItemId::new(s)).collect()
    }

    fn fi(items: &[&str], count: u64) -> FrequentItemset {
        FrequentItemset::new(set(items), count, 4)
    }

    #[test]
    fn test_anti_monotone_holds() {
        let itemsets = vec![fi(&["A"], 3), fi(&["B"], 3), fi(&["A", "B"], 2)];
        assert!(invariant_anti_monotone(&itemsets));
    }

    #[test]
    fn test_anti_monotone_violated_by_count() {
        let itemsets = vec![fi(&["A"], 1), fi(&["B"], 3), fi(&["A", "B"], 2)];
        assert!(!invariant_anti_monotone(&itemsets));
    }

    #[test]
    fn test_anti_monotone_violated_by_missing_subset() {
        let itemsets = vec![fi(&["A"], 3), fi(&["A", "B"], 2)];
        assert!(!invariant_anti_monotone(&itemsets));
    }

    #[test]
    fn test_rule_bounds() {
        let good = AssociationRule {
            antecedent: set(&["A"]),
            consequent: set(&["B"]),
            antecedent_support: 0.75,
            consequent_support: 0.75,
            support: 0.5,
            confidence: 0.5 / 0.75,
            lift: (0.5 / 0.75) / 0.75,
        };
        assert!(invariant_rule_bounds(&[good.clone()]));

        let overlapping = AssociationRule {
            consequent: set(&["A", "B"]),
            ..good
        };
        assert!(!invariant_rule_bounds(&[overlapping]));
    }

    #[test]
    fn test_recommendation_exclusion() {
        let query = set(&["A"]);
        let rec = |item: &str| Recommendation {
            item: ItemId::new(item),
            confidence: 1.0,
            lift: 1.0,
            support: 0.5,
        };
        assert!(invariant_recommendation_exclusion(&query, &[rec("B"), rec("C")]));
        assert!(!invariant_recommendation_exclusion(&query, &[rec("A")]));
        assert!(!invariant_recommendation_exclusion(&query, &[rec("B"), rec("B")]));
    }
}
