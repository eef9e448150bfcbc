//! IPC Handler for the Model Service
//!
//! Converts core results into display views. A name lookup failure drops
//! only the entry being formatted; the rest of the listing is still served.

use crate::application::service::BasketService;
use crate::domain::entities::{ModelStatus, TopProduct};
use crate::domain::errors::BasketError;
use crate::domain::value_objects::TrainingRequest;
use crate::ipc::payloads::{
    DashboardMetricsView, DashboardView, FrequentItemsetsResponse, ItemsetView,
    RecommendRequest, RecommendResponse, RecommendationView, RuleView, RulesResponse,
    SimulateTransactionRequest, SimulateTransactionResponse, StatusView, TopProductView,
    TrainResponse,
};
use crate::ports::inbound::MarketBasketApi;
use crate::ports::outbound::{ItemNameLookup, LookupError};
use shared_types::{AssociationRule, CancellationToken, FrequentItemset, ItemId, Recommendation};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

const SUCCESS: &str = "success";

/// Request handler pairing a market basket service with a name lookup.
pub struct BasketRequestHandler {
    service: Arc<dyn MarketBasketApi>,
    names: Arc<dyn ItemNameLookup>,
    default_top_n: usize,
}

impl BasketRequestHandler {
    pub fn new(
        service: Arc<dyn MarketBasketApi>,
        names: Arc<dyn ItemNameLookup>,
        default_top_n: usize,
    ) -> Self {
        Self {
            service,
            names,
            default_top_n,
        }
    }

    /// Handler using the service's configured recommendation default.
    pub fn for_service(service: Arc<BasketService>, names: Arc<dyn ItemNameLookup>) -> Self {
        let default_top_n = service.config().recommendation.default_top_n;
        Self::new(service, names, default_top_n)
    }

    pub fn handle_train(
        &self,
        request: &TrainingRequest,
        cancel: &CancellationToken,
    ) -> Result<TrainResponse, BasketError> {
        let summary = self.service.train(request, cancel)?;
        Ok(TrainResponse {
            status: SUCCESS.to_string(),
            message: "Model trained successfully".to_string(),
            transactions_count: summary.transactions_count,
            frequent_itemsets_count: summary.frequent_itemsets_count,
            rules_count: summary.rules_count,
            training_time: summary.trained_at.to_rfc3339(),
            training_duration_ms: summary.training_duration_ms,
        })
    }

    pub fn handle_frequent_itemsets(
        &self,
        min_support: Option<f64>,
        limit: Option<usize>,
    ) -> Result<FrequentItemsetsResponse, BasketError> {
        let itemsets = self.service.list_frequent_itemsets(min_support, limit)?;
        Ok(FrequentItemsetsResponse {
            status: SUCCESS.to_string(),
            frequent_itemsets: self.format_all(&itemsets, "itemset", |fi| self.itemset_view(fi)),
        })
    }

    pub fn handle_rules(
        &self,
        min_confidence: Option<f64>,
        min_lift: Option<f64>,
        limit: Option<usize>,
    ) -> Result<RulesResponse, BasketError> {
        let rules = self.service.list_rules(min_confidence, min_lift, limit)?;
        Ok(RulesResponse {
            status: SUCCESS.to_string(),
            rules: self.format_all(&rules, "rule", |r| self.rule_view(r)),
        })
    }

    pub fn handle_recommend(
        &self,
        request: &RecommendRequest,
    ) -> Result<RecommendResponse, BasketError> {
        let query = parse_items(request.items.iter().map(String::as_str));
        let top_n = request.top_n.unwrap_or(self.default_top_n);
        let recs = self.service.recommend(&query, top_n)?;

        Ok(RecommendResponse {
            status: SUCCESS.to_string(),
            input_items: query.iter().map(ToString::to_string).collect(),
            input_names: query.iter().map(|id| self.input_name(id)).collect(),
            recommendations: self
                .format_all(&recs, "recommendation", |r| self.recommendation_view(r)),
        })
    }

    pub fn handle_simulate(
        &self,
        request: &SimulateTransactionRequest,
    ) -> Result<SimulateTransactionResponse, BasketError> {
        let transaction_id = request
            .transaction_id
            .clone()
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let query = parse_items(request.items.iter().map(|item| item.item_id.as_str()));
        let recs = self.service.recommend(&query, self.default_top_n)?;

        info!(
            transaction_id = %transaction_id,
            items = query.len(),
            recommendations = recs.len(),
            "[mb-03] Simulated transaction"
        );

        Ok(SimulateTransactionResponse {
            status: SUCCESS.to_string(),
            transaction_id,
            input_items: query.iter().map(ToString::to_string).collect(),
            recommendations: self
                .format_all(&recs, "recommendation", |r| self.recommendation_view(r)),
        })
    }

    pub fn handle_dashboard(&self) -> Result<DashboardView, BasketError> {
        let summary = self.service.dashboard()?;
        Ok(DashboardView {
            top_products: self
                .format_all(&summary.top_products, "top product", |p| self.product_view(p)),
            top_combinations: self
                .format_all(&summary.top_combinations, "rule", |r| self.rule_view(r)),
            metrics: DashboardMetricsView {
                total_transactions: summary.metrics.total_transactions,
                unique_products: summary.metrics.unique_products,
                avg_basket_size: summary.metrics.avg_basket_size,
                avg_basket_value: summary.metrics.avg_basket_value,
                last_training_time: summary.metrics.last_training_time.to_rfc3339(),
            },
        })
    }

    pub fn handle_status(&self) -> StatusView {
        status_view(self.service.status())
    }

    // ------------------------------------------------------------------
    // Formatting
    // ------------------------------------------------------------------

    fn format_all<T, V>(
        &self,
        entries: &[T],
        kind: &str,
        format: impl Fn(&T) -> Result<V, LookupError>,
    ) -> Vec<V> {
        entries
            .iter()
            .filter_map(|entry| match format(entry) {
                Ok(view) => Some(view),
                Err(e) => {
                    error!(kind, error = %e, "[mb-03] Skipping entry with unresolvable name");
                    None
                }
            })
            .collect()
    }

    fn itemset_view(&self, fi: &FrequentItemset) -> Result<ItemsetView, LookupError> {
        let product_names = self.names.names(fi.items.items())?;
        let name = if fi.len() == 1 {
            product_names.first().cloned()
        } else {
            None
        };
        Ok(ItemsetView {
            itemset: fi.items.iter().map(ToString::to_string).collect(),
            product_names,
            support: fi.support,
            count: fi.count,
            name,
        })
    }

    fn rule_view(&self, rule: &AssociationRule) -> Result<RuleView, LookupError> {
        Ok(RuleView {
            antecedents: rule.antecedent.iter().map(ToString::to_string).collect(),
            antecedent_names: self.names.names(rule.antecedent.items())?,
            consequents: rule.consequent.iter().map(ToString::to_string).collect(),
            consequent_names: self.names.names(rule.consequent.items())?,
            support: rule.support,
            confidence: rule.confidence,
            lift: rule.lift,
        })
    }

    fn recommendation_view(&self, rec: &Recommendation) -> Result<RecommendationView, LookupError> {
        Ok(RecommendationView {
            id: rec.item.to_string(),
            name: self.names.name_or_id(&rec.item)?,
            confidence: rec.confidence,
            lift: rec.lift,
            support: rec.support,
        })
    }

    fn product_view(&self, product: &TopProduct) -> Result<TopProductView, LookupError> {
        Ok(TopProductView {
            id: product.item.to_string(),
            name: self.names.name_or_id(&product.item)?,
            transactions: product.count,
        })
    }

    /// Input names keep their position, so a failed lookup shows the id.
    fn input_name(&self, id: &ItemId) -> String {
        self.names.name_or_id(id).unwrap_or_else(|e| {
            error!(item = %id, error = %e, "[mb-03] Name lookup failed for input item");
            id.to_string()
        })
    }
}

fn parse_items<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<ItemId> {
    raw.filter_map(ItemId::parse).collect()
}

fn status_view(status: ModelStatus) -> StatusView {
    StatusView {
        model_trained: status.model_trained,
        transactions_count: status.transactions_count,
        frequent_itemsets_count: status.frequent_itemsets_count,
        rules_count: status.rules_count,
        unique_items_count: status.unique_items_count,
        avg_basket_size: status.avg_basket_size,
        avg_basket_value: status.avg_basket_value,
        last_training_time: status.last_training_time.map(|t| t.to_rfc3339()),
    }
}
