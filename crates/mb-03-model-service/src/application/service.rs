//! Market Basket Service
//!
//! Main service implementing MarketBasketApi.

use crate::algorithms::{queries, resolve_parameters};
use crate::application::registry::ModelRegistry;
use crate::config::BasketConfig;
use crate::domain::entities::{DashboardSummary, ModelStatus, TrainedModel, TrainingSummary};
use crate::domain::errors::BasketError;
use crate::domain::invariants::{invariant_snapshot_consistent, invariant_support_bounds};
use crate::domain::value_objects::{TrainingParameters, TrainingRequest};
use crate::ports::inbound::MarketBasketApi;
use chrono::Utc;
use mb_01_ingestion::{DelimitedFileSource, RecordSource, TransactionIngestionApi, TransactionIngestor};
use mb_02_mining::{AssociationMiningApi, MiningService};
use shared_types::{AssociationRule, CancellationToken, FrequentItemset, ItemId, Recommendation};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Market Basket Service
///
/// Orchestrates a training run:
/// 1. Validate the request
/// 2. Claim the single training slot
/// 3. Resolve effective parameters (full-scan limits)
/// 4. Ingest, encode, mine, derive rules
/// 5. Publish the model as the new snapshot
pub struct BasketService {
    config: BasketConfig,
    header: Arc<dyn RecordSource>,
    detail: Arc<dyn RecordSource>,
    registry: ModelRegistry,
}

impl BasketService {
    /// Create a service over explicit record sources
    pub fn new(
        config: BasketConfig,
        header: Arc<dyn RecordSource>,
        detail: Arc<dyn RecordSource>,
    ) -> Self {
        Self {
            config,
            header,
            detail,
            registry: ModelRegistry::new(),
        }
    }

    /// Create a service reading the configured delimited files
    pub fn from_config(config: BasketConfig) -> Self {
        let ingestion = &config.ingestion;
        let header = Arc::new(DelimitedFileSource::with_delimiter(
            &ingestion.header_path,
            ingestion.delimiter,
        ));
        let detail = Arc::new(DelimitedFileSource::with_delimiter(
            &ingestion.detail_path,
            ingestion.delimiter,
        ));
        Self::new(config, header, detail)
    }

    pub fn config(&self) -> &BasketConfig {
        &self.config
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    fn build_model(
        &self,
        parameters: TrainingParameters,
        cancel: &CancellationToken,
        started: Instant,
    ) -> Result<TrainedModel, BasketError> {
        let ingestor = TransactionIngestor::with_options(
            self.config.ingestion.ingest_options(parameters.sample_limit),
        );
        let outcome = ingestor.ingest(self.header.as_ref(), self.detail.as_ref(), cancel)?;
        let avg_basket_size = outcome.average_basket_size();

        let mining = MiningService::with_config(self.config.training.mining_config());
        let (universe, itemsets) = mining.encode(&outcome.transactions);
        let frequent_itemsets = mining.mine(
            &itemsets,
            parameters.min_support,
            parameters.max_itemset_size,
            cancel,
        )?;
        let rules = mining.generate_rules(&frequent_itemsets, parameters.min_confidence)?;

        // Last checkpoint: nothing is published once cancellation is requested
        if cancel.is_cancelled() {
            return Err(BasketError::Cancelled);
        }

        let model = TrainedModel {
            universe,
            frequent_itemsets,
            rules,
            transaction_count: itemsets.len() as u64,
            avg_basket_size,
            parameters,
            ingest_stats: outcome.stats,
            trained_at: Utc::now(),
            training_duration_ms: started.elapsed().as_millis() as u64,
        };
        debug_assert!(invariant_snapshot_consistent(&model));
        debug_assert!(invariant_support_bounds(&model));
        Ok(model)
    }
}

impl MarketBasketApi for BasketService {
    fn train(
        &self,
        request: &TrainingRequest,
        cancel: &CancellationToken,
    ) -> Result<TrainingSummary, BasketError> {
        request.validate()?;
        let _slot = self.registry.try_begin_training()?;
        let started = Instant::now();

        let parameters = resolve_parameters(request, &self.config.training);
        info!(
            min_support = parameters.min_support,
            min_confidence = parameters.min_confidence,
            max_itemset_size = parameters.max_itemset_size,
            sample_limit = ?parameters.sample_limit,
            "[mb-03] Training started"
        );

        let model = self.build_model(parameters, cancel, started).map_err(|e| {
            warn!(error = %e, "[mb-03] Training failed, previous model kept");
            e
        })?;
        let model = self.registry.publish(model);

        info!(
            transactions = model.transaction_count,
            itemsets = model.frequent_itemsets.len(),
            rules = model.rules.len(),
            elapsed_ms = model.training_duration_ms,
            "[mb-03] Training complete"
        );
        Ok(TrainingSummary::from(model.as_ref()))
    }

    fn list_frequent_itemsets(
        &self,
        min_support: Option<f64>,
        limit: Option<usize>,
    ) -> Result<Vec<FrequentItemset>, BasketError> {
        let model = self.registry.require()?;
        Ok(queries::list_frequent_itemsets(&model, min_support, limit))
    }

    fn list_rules(
        &self,
        min_confidence: Option<f64>,
        min_lift: Option<f64>,
        limit: Option<usize>,
    ) -> Result<Vec<AssociationRule>, BasketError> {
        let model = self.registry.require()?;
        Ok(queries::list_rules(&model, min_confidence, min_lift, limit))
    }

    fn recommend(
        &self,
        query: &[ItemId],
        top_n: usize,
    ) -> Result<Vec<Recommendation>, BasketError> {
        let model = self.registry.require()?;
        let recs = queries::recommend(&model, query, top_n);
        debug!(
            query = query.len(),
            recommendations = recs.len(),
            "[mb-03] Recommendations served"
        );
        Ok(recs)
    }

    fn status(&self) -> ModelStatus {
        queries::status(
            self.registry.snapshot().as_deref(),
            self.config.dashboard.estimated_item_price,
        )
    }

    fn dashboard(&self) -> Result<DashboardSummary, BasketError> {
        let model = self.registry.require()?;
        Ok(queries::dashboard(&model, &self.config.dashboard))
    }

    fn current_model(&self) -> Option<Arc<TrainedModel>> {
        self.registry.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mb_01_ingestion::InMemorySource;

    fn reference_service(config: BasketConfig) -> BasketService {
        let header = InMemorySource::new(
            "header",
            &["voucher_id"],
            vec![vec!["T1"], vec!["T2"], vec!["T3"], vec!["T4"]],
        );
        let detail = InMemorySource::new(
            "detail",
            &["voucher_id", "item_no"],
            vec![
                vec!["T1", "A"],
                vec!["T1", "B"],
                vec!["T2", "A"],
                vec!["T2", "B"],
                vec!["T3", "A"],
                vec!["T3", "C"],
                vec!["T4", "B"],
                vec!["T4", "C"],
            ],
        );
        BasketService::new(config, Arc::new(header), Arc::new(detail))
    }

    fn reference_request() -> TrainingRequest {
        TrainingRequest {
            min_support: 0.5,
            min_confidence: 0.5,
            max_itemset_size: 2,
            ..Default::default()
        }
    }

    #[test]
    fn test_train_publishes_model() {
        let service = reference_service(BasketConfig::default());
        let summary = service
            .train(&reference_request(), &CancellationToken::new())
            .unwrap();

        assert_eq!(summary.transactions_count, 4);
        assert_eq!(summary.frequent_itemsets_count, 4);
        assert_eq!(summary.rules_count, 2);

        let model = service.current_model().unwrap();
        assert_eq!(model.unique_items(), 3);
        assert_eq!(model.avg_basket_size, 2.0);
        assert_eq!(model.ingest_stats.joined_rows, 8);
    }

    #[test]
    fn test_recommend_after_training() {
        let service = reference_service(BasketConfig::default());
        service
            .train(&reference_request(), &CancellationToken::new())
            .unwrap();

        let recs = service.recommend(&[ItemId::new("A")], 1).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].item, ItemId::new("B"));
    }

    #[test]
    fn test_queries_require_model() {
        let service = reference_service(BasketConfig::default());
        assert!(matches!(
            service.recommend(&[ItemId::new("A")], 1),
            Err(BasketError::ModelNotTrained)
        ));
        assert!(matches!(
            service.list_rules(None, None, None),
            Err(BasketError::ModelNotTrained)
        ));
        assert!(matches!(
            service.list_frequent_itemsets(None, None),
            Err(BasketError::ModelNotTrained)
        ));
        assert!(matches!(service.dashboard(), Err(BasketError::ModelNotTrained)));
        assert!(!service.status().model_trained);
    }

    #[test]
    fn test_invalid_request_rejected_before_io() {
        let service = reference_service(BasketConfig::default());
        let request = TrainingRequest {
            min_support: 1.1,
            ..reference_request()
        };
        assert!(matches!(
            service.train(&request, &CancellationToken::new()),
            Err(BasketError::InvalidParameter { .. })
        ));
        assert!(service.current_model().is_none());
    }

    #[test]
    fn test_busy_training_slot() {
        let service = reference_service(BasketConfig::default());
        let _slot = service.registry().try_begin_training().unwrap();
        assert!(matches!(
            service.train(&reference_request(), &CancellationToken::new()),
            Err(BasketError::TrainingInProgress)
        ));
    }

    #[test]
    fn test_cancelled_training_publishes_nothing() {
        let service = reference_service(BasketConfig::default());
        let cancel = CancellationToken::new();
        cancel.cancel();

        assert!(matches!(
            service.train(&reference_request(), &cancel),
            Err(BasketError::Cancelled)
        ));
        assert!(service.current_model().is_none());
    }

    #[test]
    fn test_full_scan_parameters_recorded() {
        let service = reference_service(BasketConfig::default());
        let request = TrainingRequest {
            use_sample_data: false,
            max_itemset_size: 8,
            ..reference_request()
        };
        let summary = service.train(&request, &CancellationToken::new()).unwrap();

        assert_eq!(summary.parameters.max_itemset_size, 3);
        assert_eq!(summary.parameters.min_support, 0.5);
        assert!(summary.parameters.sample_limit.is_none());
    }

    #[test]
    fn test_sampling_limits_rows() {
        let service = reference_service(BasketConfig::default());
        let request = TrainingRequest {
            sample_size: 2,
            ..reference_request()
        };
        service.train(&request, &CancellationToken::new()).unwrap();

        // Header prefix T1, T2; detail prefix is both rows of T1
        let model = service.current_model().unwrap();
        assert_eq!(model.transaction_count, 1);
        assert_eq!(model.ingest_stats.detail_rows, 2);
    }
}
