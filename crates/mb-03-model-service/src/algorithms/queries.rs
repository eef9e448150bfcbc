//! Read-only queries over a trained model
//!
//! Pure functions of a snapshot. The service resolves the current snapshot
//! and hands it in; nothing here can observe a model mid-publication.

use crate::config::DashboardConfig;
use crate::domain::entities::{
    DashboardMetrics, DashboardSummary, ModelStatus, TopProduct, TrainedModel,
};
use shared_types::{AssociationRule, FrequentItemset, ItemId, Recommendation};

/// Itemsets with support ≥ `min_support`, strongest first, at most `limit`.
pub fn list_frequent_itemsets(
    model: &TrainedModel,
    min_support: Option<f64>,
    limit: Option<usize>,
) -> Vec<FrequentItemset> {
    model
        .frequent_itemsets
        .iter()
        .filter(|fi| min_support.map_or(true, |min| fi.support >= min))
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .collect()
}

/// Rules meeting both optional thresholds, in model order, at most `limit`.
pub fn list_rules(
    model: &TrainedModel,
    min_confidence: Option<f64>,
    min_lift: Option<f64>,
    limit: Option<usize>,
) -> Vec<AssociationRule> {
    model
        .rules
        .iter()
        .filter(|r| min_confidence.map_or(true, |min| r.confidence >= min))
        .filter(|r| min_lift.map_or(true, |min| r.lift >= min))
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .collect()
}

pub fn recommend(model: &TrainedModel, query: &[ItemId], top_n: usize) -> Vec<Recommendation> {
    mb_02_mining::recommend(query, &model.rules, top_n)
}

/// Never fails: an absent model reports zeros.
pub fn status(model: Option<&TrainedModel>, estimated_item_price: f64) -> ModelStatus {
    match model {
        None => ModelStatus::default(),
        Some(model) => ModelStatus {
            model_trained: true,
            transactions_count: model.transaction_count,
            frequent_itemsets_count: model.frequent_itemsets.len(),
            rules_count: model.rules.len(),
            unique_items_count: model.unique_items(),
            avg_basket_size: model.avg_basket_size,
            avg_basket_value: model.avg_basket_size * estimated_item_price,
            last_training_time: Some(model.trained_at),
        },
    }
}

/// Top single items by transaction count, top rules, and basket metrics.
pub fn dashboard(model: &TrainedModel, config: &DashboardConfig) -> DashboardSummary {
    // Itemsets are already ordered by count, then canonical order
    let top_products = model
        .frequent_itemsets
        .iter()
        .filter(|fi| fi.len() == 1)
        .take(config.top_products)
        .filter_map(|fi| {
            fi.items.iter().next().map(|item| TopProduct {
                item: item.clone(),
                count: fi.count,
                support: fi.support,
            })
        })
        .collect();

    let top_combinations = model
        .rules
        .iter()
        .take(config.top_combinations)
        .cloned()
        .collect();

    DashboardSummary {
        top_products,
        top_combinations,
        metrics: DashboardMetrics {
            total_transactions: model.transaction_count,
            unique_products: model.unique_items(),
            avg_basket_size: round2(model.avg_basket_size),
            avg_basket_value: round2(model.avg_basket_size * config.estimated_item_price),
            last_training_time: model.trained_at,
        },
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
