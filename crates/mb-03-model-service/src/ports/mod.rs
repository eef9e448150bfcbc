//! Ports module for the Model Service
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::MarketBasketApi;
pub use outbound::{ItemNameLookup, LookupError};
