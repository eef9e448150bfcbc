//! Core entities for the Model Service

use crate::domain::value_objects::TrainingParameters;
use chrono::{DateTime, Utc};
use mb_01_ingestion::IngestStats;
use mb_02_mining::ItemUniverse;
use serde::{Deserialize, Serialize};
use shared_types::{AssociationRule, FrequentItemset, ItemId};

/// Frozen result of one successful training run.
///
/// Itemsets are ordered by support descending and rules by confidence then
/// lift descending; queries rely on both orders.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrainedModel {
    pub universe: ItemUniverse,
    pub frequent_itemsets: Vec<FrequentItemset>,
    pub rules: Vec<AssociationRule>,
    pub transaction_count: u64,
    /// Mean raw line items per transaction
    pub avg_basket_size: f64,
    pub parameters: TrainingParameters,
    pub ingest_stats: IngestStats,
    pub trained_at: DateTime<Utc>,
    pub training_duration_ms: u64,
}

impl TrainedModel {
    pub fn unique_items(&self) -> usize {
        self.universe.len()
    }
}

/// Returned by a successful `train`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    pub transactions_count: u64,
    pub frequent_itemsets_count: usize,
    pub rules_count: usize,
    pub trained_at: DateTime<Utc>,
    pub training_duration_ms: u64,
    pub parameters: TrainingParameters,
}

impl From<&TrainedModel> for TrainingSummary {
    fn from(model: &TrainedModel) -> Self {
        Self {
            transactions_count: model.transaction_count,
            frequent_itemsets_count: model.frequent_itemsets.len(),
            rules_count: model.rules.len(),
            trained_at: model.trained_at,
            training_duration_ms: model.training_duration_ms,
            parameters: model.parameters.clone(),
        }
    }
}

/// Counts describing the current model; all zero when none is published.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelStatus {
    pub model_trained: bool,
    pub transactions_count: u64,
    pub frequent_itemsets_count: usize,
    pub rules_count: usize,
    pub unique_items_count: usize,
    pub avg_basket_size: f64,
    /// Estimated: average basket size times a flat per-item price
    pub avg_basket_value: f64,
    pub last_training_time: Option<DateTime<Utc>>,
}

/// A best-selling single item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub item: ItemId,
    /// Transactions containing the item
    pub count: u64,
    pub support: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub total_transactions: u64,
    pub unique_products: usize,
    /// Rounded to two decimals
    pub avg_basket_size: f64,
    /// Rounded to two decimals
    pub avg_basket_value: f64,
    pub last_training_time: DateTime<Utc>,
}

/// Headline figures for a trained model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub top_products: Vec<TopProduct>,
    pub top_combinations: Vec<AssociationRule>,
    pub metrics: DashboardMetrics,
}
