//! Published model snapshot
//!
//! The current model is an `Arc` behind a read-write lock. Readers hold the
//! lock only long enough to clone the `Arc`; publication swaps the whole
//! snapshot in one write. A separate mutex is the single training slot.

use crate::domain::entities::TrainedModel;
use crate::domain::errors::BasketError;
use parking_lot::{Mutex, MutexGuard, RwLock};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Default)]
pub struct ModelRegistry {
    current: RwLock<Option<Arc<TrainedModel>>>,
    training: Mutex<()>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot, if one has been published.
    pub fn snapshot(&self) -> Option<Arc<TrainedModel>> {
        self.current.read().clone()
    }

    /// The current snapshot or `ModelNotTrained`.
    pub fn require(&self) -> Result<Arc<TrainedModel>, BasketError> {
        self.snapshot().ok_or(BasketError::ModelNotTrained)
    }

    /// Replace the current snapshot wholesale.
    pub fn publish(&self, model: TrainedModel) -> Arc<TrainedModel> {
        let model = Arc::new(model);
        let previous = self.current.write().replace(Arc::clone(&model));
        info!(
            transactions = model.transaction_count,
            itemsets = model.frequent_itemsets.len(),
            rules = model.rules.len(),
            replaced = previous.is_some(),
            "[mb-03] Model published"
        );
        model
    }

    /// Claim the training slot until the guard drops.
    pub fn try_begin_training(&self) -> Result<MutexGuard<'_, ()>, BasketError> {
        self.training
            .try_lock()
            .ok_or(BasketError::TrainingInProgress)
    }

    pub fn is_training(&self) -> bool {
        self.training.is_locked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::TrainingParameters;
    use chrono::Utc;
    use mb_01_ingestion::IngestStats;
    use mb_02_mining::ItemUniverse;

    fn empty_model(transaction_count: u64) -> TrainedModel {
        TrainedModel {
            universe: ItemUniverse::default(),
            frequent_itemsets: Vec::new(),
            rules: Vec::new(),
            transaction_count,
            avg_basket_size: 0.0,
            parameters: TrainingParameters {
                min_support: 0.5,
                min_confidence: 0.5,
                max_itemset_size: 2,
                sample_limit: None,
            },
            ingest_stats: IngestStats::default(),
            trained_at: Utc::now(),
            training_duration_ms: 0,
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = ModelRegistry::new();
        assert!(registry.snapshot().is_none());
        assert!(matches!(registry.require(), Err(BasketError::ModelNotTrained)));
    }

    #[test]
    fn test_publish_replaces_snapshot() {
        let registry = ModelRegistry::new();
        registry.publish(empty_model(1));
        let held = registry.require().unwrap();

        registry.publish(empty_model(2));

        // Existing readers keep the snapshot they resolved
        assert_eq!(held.transaction_count, 1);
        assert_eq!(registry.require().unwrap().transaction_count, 2);
    }

    #[test]
    fn test_single_training_slot() {
        let registry = ModelRegistry::new();
        let guard = registry.try_begin_training().unwrap();
        assert!(registry.is_training());
        assert!(matches!(
            registry.try_begin_training(),
            Err(BasketError::TrainingInProgress)
        ));

        drop(guard);
        assert!(registry.try_begin_training().is_ok());
    }
}
