//! Error types for Association Mining

use thiserror::Error;

/// All errors that can occur while mining
#[derive(Debug, Error)]
pub enum MiningError {
    /// Threshold or size out of range
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Cancelled at a level checkpoint
    #[error("Mining cancelled after level {completed_levels}")]
    Cancelled { completed_levels: usize },
}

impl MiningError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
