//! Apriori candidate generation
//!
//! Candidates of size k+1 come from joining two frequent k-itemsets that
//! share their first k-1 items, then pruning any candidate that has an
//! infrequent k-subset. Pruned candidates are never counted.

use crate::domain::entities::ItemCode;
use std::collections::HashSet;

/// Outcome of one generation step.
#[derive(Debug, Default)]
pub struct CandidateSet {
    /// Surviving candidates, lexically sorted
    pub candidates: Vec<Vec<ItemCode>>,
    /// Joined candidates discarded by subset pruning
    pub pruned: usize,
}

/// Generate (k+1)-candidates from lexically sorted frequent k-itemsets.
pub fn generate_candidates(frequent: &[Vec<ItemCode>]) -> CandidateSet {
    let mut result = CandidateSet::default();
    let Some(k) = frequent.first().map(Vec::len) else {
        return result;
    };

    let known: HashSet<&[ItemCode]> = frequent.iter().map(Vec::as_slice).collect();

    for (i, left) in frequent.iter().enumerate() {
        let prefix = &left[..k - 1];
        for right in frequent[i + 1..].iter() {
            if &right[..k - 1] != prefix {
                break;
            }

            let mut candidate = Vec::with_capacity(k + 1);
            candidate.extend_from_slice(left);
            candidate.push(right[k - 1]);

            if all_subsets_frequent(&candidate, &known) {
                result.candidates.push(candidate);
            } else {
                result.pruned += 1;
            }
        }
    }

    result
}

/// Check every k-subset of a (k+1)-candidate. The two subsets obtained by
/// dropping one of the last two items are the join parents and always known.
fn all_subsets_frequent(candidate: &[ItemCode], known: &HashSet<&[ItemCode]>) -> bool {
    let len = candidate.len();
    if len <= 2 {
        return true;
    }

    let mut subset = Vec::with_capacity(len - 1);
    for skip in 0..len - 2 {
        subset.clear();
        subset.extend(
            candidate
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, &c)| c),
        );
        if !known.contains(subset.as_slice()) {
            return false;
        }
    }
    true
}
