//! Algorithms module for Transaction Ingestion
//!
//! Contains:
//! - Header key index (join side)
//! - Key-accumulating transaction grouping

pub mod accumulator;
pub mod header_index;

pub use accumulator::TransactionAccumulator;
pub use header_index::HeaderKeyIndex;
