//! # Market-Basket Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Seeded synthetic transaction generators
//! └── integration/      # Cross-subsystem flows (mb-01 → mb-02 → mb-03)
//!
//! tests/benches/
//! └── mining_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p mb-tests
//!
//! # Benchmarks
//! cargo bench -p mb-tests
//! ```

pub mod fixtures;
pub mod integration;
