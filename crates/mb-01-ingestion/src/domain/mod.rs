//! Domain module for Transaction Ingestion
//!
//! Contains ingestion outcome entities, errors, and the resolved column layout.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use value_objects::*;
