//! Configuration for the Model Service

use crate::domain::errors::BasketError;
use crate::domain::value_objects::TrainingRequest;
use mb_01_ingestion::{IngestOptions, KeyOrder};
use mb_02_mining::MiningConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete service configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BasketConfig {
    pub ingestion: IngestionConfig,
    pub training: TrainingConfig,
    pub recommendation: RecommendationConfig,
    pub names: NamesConfig,
    pub dashboard: DashboardConfig,
}

/// Where transactions come from and how they are read
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestionConfig {
    pub header_path: PathBuf,
    pub detail_path: PathBuf,
    pub key_column: String,
    pub item_column: String,
    pub delimiter: char,
    /// Detail rows per processing chunk
    pub chunk_size: usize,
    pub key_order: KeyOrder,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            header_path: PathBuf::from("data/Header_comb.csv"),
            detail_path: PathBuf::from("data/Detail_comb.csv"),
            key_column: "voucher_id".to_string(),
            item_column: "item_no".to_string(),
            delimiter: ',',
            chunk_size: 200_000,
            key_order: KeyOrder::Unordered,
        }
    }
}

impl IngestionConfig {
    pub fn ingest_options(&self, sample_limit: Option<usize>) -> IngestOptions {
        IngestOptions {
            key_column: self.key_column.clone(),
            item_column: self.item_column.clone(),
            chunk_size: self.chunk_size,
            sample_limit,
            key_order: self.key_order,
        }
    }
}

/// Training defaults and full-scan limits
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    pub min_support: f64,
    pub min_confidence: f64,
    pub max_itemset_size: usize,
    pub use_sample_data: bool,
    pub sample_size: usize,
    /// Full scans never mine below this support
    pub full_scan_min_support_floor: f64,
    /// Full scans never mine itemsets larger than this
    pub full_scan_max_itemset_size: usize,
    /// Baskets below which support counting stays sequential
    pub parallel_threshold: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            min_support: 0.01,
            min_confidence: 0.5,
            max_itemset_size: 3,
            use_sample_data: true,
            sample_size: 500_000,
            full_scan_min_support_floor: 0.01,
            full_scan_max_itemset_size: 3,
            parallel_threshold: MiningConfig::default().parallel_threshold,
        }
    }
}

impl TrainingConfig {
    /// A request carrying the configured defaults.
    pub fn default_request(&self) -> TrainingRequest {
        TrainingRequest {
            min_support: self.min_support,
            min_confidence: self.min_confidence,
            max_itemset_size: self.max_itemset_size,
            use_sample_data: self.use_sample_data,
            sample_size: self.sample_size,
        }
    }

    pub fn mining_config(&self) -> MiningConfig {
        MiningConfig {
            parallel_threshold: self.parallel_threshold,
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    pub default_top_n: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self { default_top_n: 5 }
    }
}

/// Display-name mapping file (columns `ProductID`, `ProductName`)
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NamesConfig {
    pub product_names_path: Option<PathBuf>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub top_products: usize,
    pub top_combinations: usize,
    /// Flat per-item price used to estimate basket value
    pub estimated_item_price: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            top_products: 5,
            top_combinations: 5,
            estimated_item_price: 15.0,
        }
    }
}

impl BasketConfig {
    /// Check every section up front so a bad file fails at startup.
    pub fn validate(&self) -> Result<(), BasketError> {
        self.training.default_request().validate()?;
        self.ingestion.ingest_options(None).validate()?;

        let floor = self.training.full_scan_min_support_floor;
        if !(floor > 0.0 && floor <= 1.0) {
            return Err(BasketError::invalid(
                "full_scan_min_support_floor",
                format!("{} is outside (0, 1]", floor),
            ));
        }
        if self.training.full_scan_max_itemset_size == 0 {
            return Err(BasketError::invalid(
                "full_scan_max_itemset_size",
                "must be at least 1",
            ));
        }
        if matches!(self.ingestion.delimiter, '"' | '\n' | '\r') {
            return Err(BasketError::invalid(
                "delimiter",
                format!("{:?} cannot separate fields", self.ingestion.delimiter),
            ));
        }
        if !(self.dashboard.estimated_item_price >= 0.0) {
            return Err(BasketError::invalid(
                "estimated_item_price",
                "must be non-negative",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BasketConfig::default();
        assert_eq!(config.ingestion.key_column, "voucher_id");
        assert_eq!(config.ingestion.chunk_size, 200_000);
        assert_eq!(config.training.sample_size, 500_000);
        assert_eq!(config.recommendation.default_top_n, 5);
        assert_eq!(config.dashboard.estimated_item_price, 15.0);
        assert!(config.names.product_names_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: BasketConfig = serde_json::from_str(
            r#"{"training": {"min_support": 0.05}, "ingestion": {"key_order": "clustered"}}"#,
        )
        .unwrap();
        assert_eq!(config.training.min_support, 0.05);
        assert_eq!(config.training.max_itemset_size, 3);
        assert_eq!(config.ingestion.key_order, KeyOrder::Clustered);
        assert_eq!(config.ingestion.item_column, "item_no");
    }

    #[test]
    fn test_validate_rejects_bad_sections() {
        let mut config = BasketConfig::default();
        config.training.min_support = 0.0;
        assert!(config.validate().is_err());

        let mut config = BasketConfig::default();
        config.ingestion.chunk_size = 0;
        assert!(matches!(
            config.validate(),
            Err(BasketError::InvalidParameter { ref name, .. }) if name == "ingestion"
        ));

        let mut config = BasketConfig::default();
        config.training.full_scan_max_itemset_size = 0;
        assert!(config.validate().is_err());

        let mut config = BasketConfig::default();
        config.ingestion.delimiter = '"';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ingest_options_carry_sample_limit() {
        let options = BasketConfig::default().ingestion.ingest_options(Some(10));
        assert_eq!(options.sample_limit, Some(10));
        assert_eq!(options.key_column, "voucher_id");
    }
}
