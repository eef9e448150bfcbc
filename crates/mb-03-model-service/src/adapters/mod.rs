//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implementations of the `ItemNameLookup` port.

mod csv_names;
mod static_names;

pub use csv_names::CsvNameLookup;
pub use static_names::StaticNameLookup;
