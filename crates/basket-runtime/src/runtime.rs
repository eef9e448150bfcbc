//! Training runtime
//!
//! Wires the model service to its name lookup and runs training off the
//! async executor, since a run is a CPU-bound batch job.

use anyhow::{Context, Result};
use mb_03_model_service::ipc::{RecommendRequest, RecommendResponse, TrainResponse};
use mb_03_model_service::{
    BasketConfig, BasketRequestHandler, BasketService, CsvNameLookup, ItemNameLookup,
    StaticNameLookup, TrainingRequest,
};
use shared_types::CancellationToken;
use std::sync::Arc;
use tracing::info;

/// The assembled service with its request handler.
pub struct BasketRuntime {
    service: Arc<BasketService>,
    handler: Arc<BasketRequestHandler>,
}

impl BasketRuntime {
    pub fn new(config: BasketConfig) -> Self {
        let names: Arc<dyn ItemNameLookup> = match &config.names.product_names_path {
            Some(path) => Arc::new(CsvNameLookup::load(path)),
            None => Arc::new(StaticNameLookup::default()),
        };
        info!(
            header = %config.ingestion.header_path.display(),
            detail = %config.ingestion.detail_path.display(),
            "Creating market basket runtime"
        );

        let service = Arc::new(BasketService::from_config(config));
        let handler = Arc::new(BasketRequestHandler::for_service(
            Arc::clone(&service),
            names,
        ));
        Self { service, handler }
    }

    pub fn service(&self) -> Arc<BasketService> {
        Arc::clone(&self.service)
    }

    pub fn handler(&self) -> Arc<BasketRequestHandler> {
        Arc::clone(&self.handler)
    }

    /// A training request carrying the configured defaults.
    pub fn default_request(&self) -> TrainingRequest {
        self.service.config().training.default_request()
    }

    /// Train on a blocking worker thread.
    pub async fn train(
        &self,
        request: TrainingRequest,
        cancel: CancellationToken,
    ) -> Result<TrainResponse> {
        let handler = self.handler();
        let response = tokio::task::spawn_blocking(move || handler.handle_train(&request, &cancel))
            .await
            .context("training task panicked")??;
        Ok(response)
    }

    /// Recommend against the current model with the configured default size.
    pub fn recommend(&self, items: Vec<String>) -> Result<RecommendResponse> {
        let response = self
            .handler
            .handle_recommend(&RecommendRequest { items, top_n: None })?;
        Ok(response)
    }
}
