//! Ports module for Transaction Ingestion
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::TransactionIngestionApi;
pub use outbound::{RecordRow, RecordSource, RecordStream};
