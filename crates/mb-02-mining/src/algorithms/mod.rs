//! Algorithms module for Association Mining
//!
//! Contains:
//! - Item encoder
//! - Apriori candidate generation and support counting
//! - Association rule generation
//! - Rule-based recommendation

pub mod apriori;
pub mod candidates;
pub mod counting;
pub mod encoder;
pub mod recommend;
pub mod rules;

pub use apriori::{
    mine_frequent_itemsets, mine_with_cancel, validate_mining_parameters, AprioriMiner,
};
pub use encoder::encode;
pub use recommend::recommend;
pub use rules::{generate_rules, validate_min_confidence};
