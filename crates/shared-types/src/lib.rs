//! # Shared Types Crate
//!
//! This crate contains the data model every market-basket subsystem speaks:
//! raw transactions produced by ingestion, canonical itemsets consumed by the
//! miner, and the frequent itemsets, rules and recommendations it produces.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Canonical Form**: Item identifiers are normalized once, at construction,
//!   and itemsets are always stored sorted and deduplicated so equality and
//!   subset checks are order-independent.
//! - **Immutable Outputs**: Mined values carry exact integer counts alongside
//!   the derived ratios.

pub mod cancellation;
pub mod entities;

pub use cancellation::CancellationToken;
pub use entities::*;
