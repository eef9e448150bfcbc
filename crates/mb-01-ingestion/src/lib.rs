//! # MB-01: Transaction Ingestion Subsystem
//!
//! Joins a header record set to a detail record set on the transaction key
//! and groups detail item identifiers into one `Transaction` per key.
//!
//! ## Architecture
//!
//! - **Domain**: Errors, ingestion statistics, column layout
//! - **Algorithms**: Header key index, key-accumulating grouping
//! - **Ports**: Inbound (TransactionIngestionApi) and Outbound (RecordSource)
//! - **Adapters**: Delimited text files, in-memory record sets
//! - **Service**: Chunked, bounded-memory ingestion pipeline
//!
//! ## Chunk Boundaries
//!
//! Detail rows are processed in fixed-size chunks, but grouping state is
//! carried across chunks in an accumulating map. A transaction whose rows
//! straddle a boundary is always emitted once, with the union of its items.

pub mod adapters;
pub mod algorithms;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::{DelimitedFileSource, InMemorySource};
pub use config::{IngestOptions, KeyOrder};
pub use domain::entities::{IngestOutcome, IngestStats};
pub use domain::errors::IngestError;
pub use ports::inbound::TransactionIngestionApi;
pub use ports::outbound::{RecordRow, RecordSource, RecordStream};
pub use service::TransactionIngestor;
