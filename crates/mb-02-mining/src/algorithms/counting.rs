//! Parallel support counting
//!
//! One full scan over the baskets per level. Baskets are split into chunks,
//! each worker folds its chunk into a private count vector, and the vectors
//! are summed. Integer addition is order-independent, so the result is the
//! same for any worker count.
//!
//! Per basket, the cheaper of two strategies is used:
//! - enumerate the basket's k-combinations and look each up in a candidate index
//! - scan every candidate and test it as a subset of the basket

use crate::domain::entities::ItemCode;
use rayon::prelude::*;
use std::collections::HashMap;

/// Count how many baskets contain each single item code.
pub fn count_items(
    baskets: &[Vec<ItemCode>],
    universe_len: usize,
    parallel_threshold: usize,
    chunk_size: usize,
) -> Vec<u64> {
    let fold_chunk = |mut acc: Vec<u64>, chunk: &[Vec<ItemCode>]| {
        for basket in chunk {
            for &code in basket {
                acc[code as usize] += 1;
            }
        }
        acc
    };

    if baskets.len() < parallel_threshold {
        return fold_chunk(vec![0; universe_len], baskets);
    }

    baskets
        .par_chunks(chunk_size.max(1))
        .fold(|| vec![0; universe_len], fold_chunk)
        .reduce(|| vec![0; universe_len], sum_counts)
}

/// Count how many baskets contain each candidate (all of size `k`).
pub fn count_candidates(
    baskets: &[Vec<ItemCode>],
    candidates: &[Vec<ItemCode>],
    k: usize,
    parallel_threshold: usize,
    chunk_size: usize,
) -> Vec<u64> {
    let index: HashMap<&[ItemCode], usize> = candidates
        .iter()
        .enumerate()
        .map(|(i, c)| (c.as_slice(), i))
        .collect();

    let fold_chunk = |mut acc: Vec<u64>, chunk: &[Vec<ItemCode>]| {
        let mut combo = Vec::with_capacity(k);
        for basket in chunk {
            count_basket(basket, candidates, &index, k, &mut combo, &mut acc);
        }
        acc
    };

    if baskets.len() < parallel_threshold {
        return fold_chunk(vec![0; candidates.len()], baskets);
    }

    baskets
        .par_chunks(chunk_size.max(1))
        .fold(|| vec![0; candidates.len()], fold_chunk)
        .reduce(|| vec![0; candidates.len()], sum_counts)
}

fn sum_counts(mut left: Vec<u64>, right: Vec<u64>) -> Vec<u64> {
    for (l, r) in left.iter_mut().zip(right) {
        *l += r;
    }
    left
}

fn count_basket(
    basket: &[ItemCode],
    candidates: &[Vec<ItemCode>],
    index: &HashMap<&[ItemCode], usize>,
    k: usize,
    combo: &mut Vec<ItemCode>,
    acc: &mut [u64],
) {
    if basket.len() < k {
        return;
    }

    if combinations_at_most(basket.len(), k, candidates.len()) {
        for_each_combination(basket, k, combo, |combo| {
            if let Some(&i) = index.get(combo) {
                acc[i] += 1;
            }
        });
    } else {
        for (i, candidate) in candidates.iter().enumerate() {
            if is_sorted_subset(candidate, basket) {
                acc[i] += 1;
            }
        }
    }
}

/// Whether C(n, k) <= limit, without overflowing.
fn combinations_at_most(n: usize, k: usize, limit: usize) -> bool {
    let k = k.min(n - k);
    let mut value: u128 = 1;
    for i in 0..k {
        value = value * (n - i) as u128 / (i + 1) as u128;
        if value > limit as u128 {
            return false;
        }
    }
    true
}

/// Visit every k-combination of `items` in lexical order.
fn for_each_combination<F: FnMut(&[ItemCode])>(
    items: &[ItemCode],
    k: usize,
    combo: &mut Vec<ItemCode>,
    mut visit: F,
) {
    let n = items.len();
    let mut idx: Vec<usize> = (0..k).collect();
    loop {
        combo.clear();
        combo.extend(idx.iter().map(|&i| items[i]));
        visit(combo);

        // Advance the rightmost index that still has room
        let mut pos = k;
        loop {
            if pos == 0 {
                return;
            }
            pos -= 1;
            if idx[pos] != pos + n - k {
                break;
            }
        }
        idx[pos] += 1;
        for j in pos + 1..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
}

/// Subset test over two sorted code lists.
pub fn is_sorted_subset(small: &[ItemCode], large: &[ItemCode]) -> bool {
    let mut large = large.iter();
    small
        .iter()
        .all(|needle| large.by_ref().any(|item| item == needle))
}
