//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::{DashboardSummary, ModelStatus, TrainedModel, TrainingSummary};
use crate::domain::errors::BasketError;
use crate::domain::value_objects::TrainingRequest;
use shared_types::{AssociationRule, CancellationToken, FrequentItemset, ItemId, Recommendation};
use std::sync::Arc;

/// Primary Market Basket API
///
/// Every query except `status` fails with `ModelNotTrained` until a training
/// run has published a model.
pub trait MarketBasketApi: Send + Sync {
    /// Run the full pipeline and publish the result.
    ///
    /// Parameters are validated before any I/O. A failed or cancelled run
    /// publishes nothing; a run started while another is in flight fails
    /// with `TrainingInProgress`.
    fn train(
        &self,
        request: &TrainingRequest,
        cancel: &CancellationToken,
    ) -> Result<TrainingSummary, BasketError>;

    fn list_frequent_itemsets(
        &self,
        min_support: Option<f64>,
        limit: Option<usize>,
    ) -> Result<Vec<FrequentItemset>, BasketError>;

    fn list_rules(
        &self,
        min_confidence: Option<f64>,
        min_lift: Option<f64>,
        limit: Option<usize>,
    ) -> Result<Vec<AssociationRule>, BasketError>;

    fn recommend(&self, query: &[ItemId], top_n: usize)
        -> Result<Vec<Recommendation>, BasketError>;

    fn status(&self) -> ModelStatus;

    fn dashboard(&self) -> Result<DashboardSummary, BasketError>;

    /// The published snapshot, if any.
    fn current_model(&self) -> Option<Arc<TrainedModel>>;
}
