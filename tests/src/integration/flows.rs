//! # Integration Test Flows
//!
//! Drives the three subsystems together and checks that the model service
//! publishes exactly what the lower layers compute on their own.
//!
//! ## Flows Tested:
//!
//! 1. **Manual pipeline ≡ service**: ingest, encode, mine and derive rules by
//!    hand, then compare with a `BasketService` training run
//! 2. **Published snapshot invariants**: every rule traces back to itemsets of
//!    the same model
//! 3. **Readers during retrain**: concurrent queries always see a complete
//!    snapshot, never a half-built one
//! 4. **Request handler**: display views carry names from the lookup

#[cfg(test)]
mod tests {
    use crate::fixtures::{self, CorpusShape};
    use mb_01_ingestion::{IngestOptions, TransactionIngestionApi, TransactionIngestor};
    use mb_02_mining::{AssociationMiningApi, MiningService};
    use mb_03_model_service::domain::invariants::{
        invariant_snapshot_consistent, invariant_support_bounds,
    };
    use mb_03_model_service::ipc::payloads::RecommendRequest;
    use mb_03_model_service::{
        BasketConfig, BasketError, BasketRequestHandler, BasketService, MarketBasketApi,
        StaticNameLookup, TrainingRequest,
    };
    use shared_types::{CancellationToken, ItemId};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Barrier};
    use std::thread;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn shape() -> CorpusShape {
        CorpusShape {
            transactions: 600,
            items: 30,
            max_basket: 6,
            seed: 11,
        }
    }

    fn request() -> TrainingRequest {
        TrainingRequest {
            min_support: 0.05,
            min_confidence: 0.1,
            max_itemset_size: 3,
            use_sample_data: false,
            ..Default::default()
        }
    }

    fn service_for(shape: CorpusShape) -> BasketService {
        let (header, detail) = fixtures::sources(shape);
        BasketService::new(BasketConfig::default(), Arc::new(header), Arc::new(detail))
    }

    // =============================================================================
    // MANUAL PIPELINE ≡ SERVICE
    // =============================================================================

    #[test]
    fn test_service_matches_manual_pipeline() {
        let cancel = CancellationToken::new();
        let (header, detail) = fixtures::sources(shape());

        // Subsystem 1: ingestion
        let outcome = TransactionIngestor::with_options(IngestOptions::default())
            .ingest(&header, &detail, &cancel)
            .unwrap();
        assert_eq!(outcome.transactions.len(), 600);
        assert_eq!(outcome.stats.orphan_rows, 0);

        // Subsystem 2: mining
        let miner = MiningService::new();
        let (_, itemsets) = miner.encode(&outcome.transactions);
        assert_eq!(itemsets, fixtures::baskets(shape()));
        let frequent = miner.mine(&itemsets, 0.05, 3, &cancel).unwrap();
        let rules = miner.generate_rules(&frequent, 0.1).unwrap();
        assert!(!frequent.is_empty());
        assert!(!rules.is_empty());

        // Subsystem 3: the service must publish the same result
        let service = service_for(shape());
        let summary = service.train(&request(), &cancel).unwrap();
        assert_eq!(summary.transactions_count, 600);

        let model = service.current_model().unwrap();
        assert_eq!(model.frequent_itemsets, frequent);
        assert_eq!(model.rules, rules);

        let query = [ItemId::new("SKU-0000")];
        assert_eq!(
            service.recommend(&query, 5).unwrap(),
            miner.recommend(&query, &rules, 5)
        );
    }

    // =============================================================================
    // PUBLISHED SNAPSHOT INVARIANTS
    // =============================================================================

    #[test]
    fn test_published_snapshot_is_consistent() {
        let service = service_for(shape());
        service.train(&request(), &CancellationToken::new()).unwrap();

        let model = service.current_model().unwrap();
        assert!(invariant_snapshot_consistent(&model));
        assert!(invariant_support_bounds(&model));

        let status = service.status();
        assert!(status.model_trained);
        assert_eq!(status.frequent_itemsets_count, model.frequent_itemsets.len());
        assert_eq!(status.rules_count, model.rules.len());
    }

    #[test]
    fn test_queries_fail_before_first_training() {
        let service = service_for(shape());
        assert!(matches!(
            service.list_rules(None, None, None),
            Err(BasketError::ModelNotTrained)
        ));
        assert!(matches!(
            service.dashboard(),
            Err(BasketError::ModelNotTrained)
        ));
        assert!(!service.status().model_trained);
    }

    // =============================================================================
    // READERS DURING RETRAIN
    // =============================================================================

    #[test]
    fn test_readers_see_complete_snapshots_during_retrain() {
        let service = Arc::new(service_for(shape()));
        service.train(&request(), &CancellationToken::new()).unwrap();

        const READERS: usize = 4;
        let done = Arc::new(AtomicBool::new(false));
        let started = Arc::new(Barrier::new(READERS + 1));
        let readers: Vec<_> = (0..READERS)
            .map(|_| {
                let service = Arc::clone(&service);
                let done = Arc::clone(&done);
                let started = Arc::clone(&started);
                thread::spawn(move || {
                    started.wait();
                    let mut observed = 0usize;
                    loop {
                        let model = service.current_model().unwrap();
                        assert!(invariant_snapshot_consistent(&model));
                        assert_eq!(model.transaction_count, 600);
                        observed += 1;
                        if done.load(Ordering::Acquire) {
                            break;
                        }
                    }
                    observed
                })
            })
            .collect();
        started.wait();

        // Retrain with different thresholds while readers run
        for min_support in [0.04, 0.08, 0.06] {
            let request = TrainingRequest {
                min_support,
                ..request()
            };
            service.train(&request, &CancellationToken::new()).unwrap();
        }
        done.store(true, Ordering::Release);

        for reader in readers {
            assert!(reader.join().unwrap() > 0);
        }
        assert_eq!(service.current_model().unwrap().parameters.min_support, 0.06);
    }

    // =============================================================================
    // REQUEST HANDLER
    // =============================================================================

    #[test]
    fn test_handler_attaches_display_names() {
        let service = Arc::new(service_for(shape()));
        let names = Arc::new(StaticNameLookup::new(
            (0..30).map(|i| (format!("SKU-{i:04}"), format!("Product {i}"))),
        ));
        let handler = BasketRequestHandler::for_service(Arc::clone(&service), names);

        handler
            .handle_train(&request(), &CancellationToken::new())
            .unwrap();

        let response = handler
            .handle_recommend(&RecommendRequest {
                items: vec!["SKU-0000".to_string()],
                top_n: Some(3),
            })
            .unwrap();
        assert!(response.recommendations.len() <= 3);
        assert!(!response.recommendations.is_empty());
        for rec in &response.recommendations {
            assert!(rec.name.starts_with("Product "));
            assert_ne!(rec.id, "SKU-0000");
        }
    }
}
