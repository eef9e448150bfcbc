//! Domain module for Association Mining
//!
//! Contains the encoded transaction database, errors, and invariants.

pub mod entities;
pub mod errors;
pub mod invariants;

pub use entities::*;
pub use errors::*;
