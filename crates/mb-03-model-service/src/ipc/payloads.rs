//! IPC Payloads for the Model Service

use serde::{Deserialize, Serialize};

// ============================================================
// INCOMING REQUESTS
// ============================================================

/// Items to recommend against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub items: Vec<String>,
    /// Falls back to the configured default
    #[serde(default)]
    pub top_n: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatedItem {
    pub item_id: String,
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
}

/// A basket as it would arrive at a point of sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulateTransactionRequest {
    /// Generated when absent
    #[serde(default)]
    pub transaction_id: Option<String>,
    pub items: Vec<SimulatedItem>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

// ============================================================
// OUTGOING RESPONSES
// ============================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainResponse {
    pub status: String,
    pub message: String,
    pub transactions_count: u64,
    pub frequent_itemsets_count: usize,
    pub rules_count: usize,
    /// RFC 3339
    pub training_time: String,
    pub training_duration_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemsetView {
    pub itemset: Vec<String>,
    pub product_names: Vec<String>,
    pub support: f64,
    pub count: u64,
    /// Set for single-item itemsets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequentItemsetsResponse {
    pub status: String,
    pub frequent_itemsets: Vec<ItemsetView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleView {
    pub antecedents: Vec<String>,
    pub antecedent_names: Vec<String>,
    pub consequents: Vec<String>,
    pub consequent_names: Vec<String>,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulesResponse {
    pub status: String,
    pub rules: Vec<RuleView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationView {
    pub id: String,
    pub name: String,
    pub confidence: f64,
    pub lift: f64,
    pub support: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub status: String,
    pub input_items: Vec<String>,
    pub input_names: Vec<String>,
    pub recommendations: Vec<RecommendationView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulateTransactionResponse {
    pub status: String,
    pub transaction_id: String,
    pub input_items: Vec<String>,
    pub recommendations: Vec<RecommendationView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProductView {
    pub id: String,
    pub name: String,
    pub transactions: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetricsView {
    pub total_transactions: u64,
    pub unique_products: usize,
    pub avg_basket_size: f64,
    pub avg_basket_value: f64,
    pub last_training_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub top_products: Vec<TopProductView>,
    pub top_combinations: Vec<RuleView>,
    pub metrics: DashboardMetricsView,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusView {
    pub model_trained: bool,
    pub transactions_count: u64,
    pub frequent_itemsets_count: usize,
    pub rules_count: usize,
    pub unique_items_count: usize,
    pub avg_basket_size: f64,
    pub avg_basket_value: f64,
    pub last_training_time: Option<String>,
}
