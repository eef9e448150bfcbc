//! # MB-03: Model Service Subsystem
//!
//! Orchestrates a training run (ingest, encode, mine, derive rules), publishes
//! the resulting `TrainedModel` as an immutable snapshot, and answers queries
//! against whichever snapshot is current.
//!
//! ## Architecture
//!
//! - **Domain**: TrainedModel, training parameters, summaries, errors
//! - **Algorithms**: Parameter resolution, read-only queries over a model
//! - **Ports**: Inbound (MarketBasketApi) and Outbound (ItemNameLookup)
//! - **Adapters**: CSV and static item-name lookups
//! - **Application**: BasketService, ModelRegistry
//! - **IPC**: Display-ready views with item names
//!
//! ## Publication
//!
//! Readers clone an `Arc` of the current snapshot and never see a model being
//! built. Only one training run may be in flight; a failed or cancelled run
//! leaves the previous snapshot in place.

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ipc;
pub mod ports;

pub use adapters::{CsvNameLookup, StaticNameLookup};
pub use application::registry::ModelRegistry;
pub use application::service::BasketService;
pub use config::BasketConfig;
pub use domain::entities::*;
pub use domain::errors::BasketError;
pub use domain::value_objects::{TrainingParameters, TrainingRequest};
pub use ipc::BasketRequestHandler;
pub use ports::inbound::MarketBasketApi;
pub use ports::outbound::{ItemNameLookup, LookupError};
