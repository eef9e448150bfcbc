//! Algorithms module for the Model Service
//!
//! Contains:
//! - Training parameter resolution (full-scan limits)
//! - Read-only queries over a trained model

pub mod parameters;
pub mod queries;

pub use parameters::resolve_parameters;
pub use queries::{dashboard, list_frequent_itemsets, list_rules, recommend, status};
