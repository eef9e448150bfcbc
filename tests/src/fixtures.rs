//! Seeded synthetic transaction generators.
//!
//! Item popularity is skewed (low item numbers are far more common), which
//! gives Apriori a realistic mix of frequent and rare items.

use mb_01_ingestion::InMemorySource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared_types::{ItemId, ItemSet};

/// Shape of a synthetic corpus.
#[derive(Clone, Copy, Debug)]
pub struct CorpusShape {
    pub transactions: usize,
    pub items: usize,
    pub max_basket: usize,
    pub seed: u64,
}

impl Default for CorpusShape {
    fn default() -> Self {
        Self {
            transactions: 1_000,
            items: 50,
            max_basket: 8,
            seed: 7,
        }
    }
}

/// `(key, item)` detail rows, grouped by key in key order.
pub fn detail_rows(shape: CorpusShape) -> Vec<(String, String)> {
    let mut rng = StdRng::seed_from_u64(shape.seed);
    let mut rows = Vec::new();
    for t in 0..shape.transactions {
        let size = rng.gen_range(1..=shape.max_basket);
        for _ in 0..size {
            // Square of a uniform draw skews toward low item numbers
            let u: f64 = rng.gen();
            let item = ((u * u) * shape.items as f64) as usize;
            rows.push((format!("V{t:07}"), format!("SKU-{item:04}")));
        }
    }
    rows
}

/// Header and detail sources for `shape`.
pub fn sources(shape: CorpusShape) -> (InMemorySource, InMemorySource) {
    let rows = detail_rows(shape);
    let header: Vec<Vec<String>> = (0..shape.transactions)
        .map(|t| vec![format!("V{t:07}")])
        .collect();
    let detail: Vec<Vec<String>> = rows.into_iter().map(|(k, i)| vec![k, i]).collect();
    (
        InMemorySource::new("header", &["voucher_id"], header),
        InMemorySource::new("detail", &["voucher_id", "item_no"], detail),
    )
}

/// Canonical baskets for `shape`, ready for mining.
pub fn baskets(shape: CorpusShape) -> Vec<ItemSet> {
    let mut baskets: Vec<ItemSet> = Vec::with_capacity(shape.transactions);
    let mut current_key: Option<String> = None;
    let mut current: Vec<ItemId> = Vec::new();
    for (key, item) in detail_rows(shape) {
        if current_key.as_deref() != Some(key.as_str()) {
            if current_key.is_some() {
                baskets.push(ItemSet::from_items(current.drain(..)));
            }
            current_key = Some(key);
        }
        current.push(ItemId::new(&item));
    }
    if current_key.is_some() {
        baskets.push(ItemSet::from_items(current));
    }
    baskets
}
