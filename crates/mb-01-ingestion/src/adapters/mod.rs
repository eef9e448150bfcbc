//! Adapters module for Transaction Ingestion
//!
//! Implementations of the `RecordSource` port.

pub mod delimited_file;
pub mod in_memory;

pub use delimited_file::DelimitedFileSource;
pub use in_memory::InMemorySource;
