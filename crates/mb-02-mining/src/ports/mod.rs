//! Ports module for Association Mining
//!
//! Defines the inbound (API) port trait. Mining has no outbound
//! dependencies; transactions arrive already grouped.

pub mod inbound;

pub use inbound::AssociationMiningApi;
