//! Value objects for the Model Service

use crate::domain::errors::BasketError;
use mb_02_mining::{validate_min_confidence, validate_mining_parameters};
use serde::{Deserialize, Serialize};

/// Parameters of one training request, as supplied by the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingRequest {
    /// Minimum support, in (0, 1]
    pub min_support: f64,
    /// Minimum rule confidence, in [0, 1]
    pub min_confidence: f64,
    /// Largest itemset mined, at least 1
    pub max_itemset_size: usize,
    /// Train on a prefix of each source instead of a full scan
    pub use_sample_data: bool,
    /// Rows read from each source when sampling
    pub sample_size: usize,
}

impl Default for TrainingRequest {
    fn default() -> Self {
        Self {
            min_support: 0.01,
            min_confidence: 0.5,
            max_itemset_size: 3,
            use_sample_data: true,
            sample_size: 500_000,
        }
    }
}

impl TrainingRequest {
    /// Reject out-of-range values before any I/O happens.
    pub fn validate(&self) -> Result<(), BasketError> {
        validate_mining_parameters(self.min_support, self.max_itemset_size)?;
        validate_min_confidence(self.min_confidence)?;
        if self.use_sample_data && self.sample_size == 0 {
            return Err(BasketError::invalid(
                "sample_size",
                "must be at least 1 when sampling",
            ));
        }
        Ok(())
    }
}

/// Parameters a model was actually trained with, after full-scan limits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingParameters {
    pub min_support: f64,
    pub min_confidence: f64,
    pub max_itemset_size: usize,
    /// Rows read from each source; `None` for a full scan
    pub sample_limit: Option<usize>,
}

impl TrainingParameters {
    pub fn is_full_scan(&self) -> bool {
        self.sample_limit.is_none()
    }
}
