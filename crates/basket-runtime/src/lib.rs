//! # Basket Runtime Library
//!
//! Exposes configuration loading and the training runtime for testing.
//! The main entry point is the `main.rs` binary.

pub mod config_loader;
pub mod runtime;

pub use config_loader::{apply_env_overrides, load_config};
pub use runtime::BasketRuntime;
