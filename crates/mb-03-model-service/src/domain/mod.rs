//! Domain module for the Model Service
//!
//! Contains the trained model, training parameters, summaries, errors and
//! snapshot invariants.

pub mod entities;
pub mod errors;
pub mod invariants;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use value_objects::*;
