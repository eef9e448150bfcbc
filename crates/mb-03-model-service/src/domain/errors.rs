//! Error types for the Model Service
//!
//! Subsystem errors are folded into the public taxonomy here, so `?` works
//! across the whole training pipeline.

use mb_01_ingestion::IngestError;
use mb_02_mining::MiningError;
use thiserror::Error;

/// All errors surfaced by training and querying
#[derive(Debug, Error)]
pub enum BasketError {
    /// Input missing, unreadable or malformed
    #[error("Data source error: {0}")]
    DataSource(String),

    /// Required join or item column absent
    #[error("Schema error: {0}")]
    Schema(String),

    /// Threshold, size or option out of range
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// No model has been published yet
    #[error("Model not trained. Please train the model first.")]
    ModelNotTrained,

    /// Another training run holds the training slot
    #[error("A training run is already in progress")]
    TrainingInProgress,

    /// The run was cancelled before it could publish
    #[error("Training cancelled")]
    Cancelled,
}

impl BasketError {
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

impl From<IngestError> for BasketError {
    fn from(err: IngestError) -> Self {
        match err {
            IngestError::DataSource { .. } => Self::DataSource(err.to_string()),
            IngestError::Schema { .. } => Self::Schema(err.to_string()),
            IngestError::InvalidOptions(reason) => Self::invalid("ingestion", reason),
            IngestError::Cancelled => Self::Cancelled,
        }
    }
}

impl From<MiningError> for BasketError {
    fn from(err: MiningError) -> Self {
        match err {
            MiningError::InvalidParameter { name, reason } => Self::invalid(name, reason),
            MiningError::Cancelled { .. } => Self::Cancelled,
        }
    }
}
