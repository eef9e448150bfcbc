//! Configuration for Association Mining

use serde::{Deserialize, Serialize};

/// Mining configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    /// Baskets below which support counting stays sequential
    pub parallel_threshold: usize,
    /// Baskets per parallel counting task
    pub count_chunk_size: usize,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 4_096,
            count_chunk_size: 1_024,
        }
    }
}

impl MiningConfig {
    /// Force sequential counting regardless of input size.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            ..Default::default()
        }
    }
}
