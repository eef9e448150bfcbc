//! IPC Module for the Model Service
//!
//! Serializable request and response views for an outer request layer.
//! Item ids are paired with display names here and nowhere else.

pub mod handler;
pub mod payloads;

pub use handler::BasketRequestHandler;
pub use payloads::*;
