//! # MB-02: Association Mining Subsystem
//!
//! Level-wise Apriori frequent-itemset mining, association-rule derivation,
//! and rule-based recommendation matching.
//!
//! ## Architecture
//!
//! - **Domain**: Item universe, encoded baskets, errors, invariants
//! - **Algorithms**: Item encoding, candidate generation, parallel support
//!   counting, Apriori levels, rule generation, recommendation ranking
//! - **Ports**: Inbound (AssociationMiningApi)
//! - **Service**: Parameter validation and orchestration
//!
//! ## Determinism
//!
//! Supports are exact integer counts divided once at the end. Every output
//! is sorted with a total order (strength first, canonical itemset order as
//! the tie-break), so parallel counting never changes the result.

pub mod algorithms;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

pub use algorithms::{
    encode, generate_rules, mine_frequent_itemsets, mine_with_cancel, recommend,
    validate_min_confidence, validate_mining_parameters, AprioriMiner,
};
pub use config::MiningConfig;
pub use domain::entities::{EncodedDatabase, ItemUniverse};
pub use domain::errors::MiningError;
pub use ports::inbound::AssociationMiningApi;
pub use service::MiningService;
