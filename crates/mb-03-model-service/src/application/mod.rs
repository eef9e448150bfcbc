//! Application layer: training orchestration and snapshot publication.

pub mod registry;
pub mod service;

pub use registry::ModelRegistry;
pub use service::BasketService;
