//! Training parameter resolution
//!
//! A full scan reads every row of both sources, so it is held to a support
//! floor and an itemset-size ceiling from configuration. Sampled runs use the
//! request as given.

use crate::config::TrainingConfig;
use crate::domain::value_objects::{TrainingParameters, TrainingRequest};
use tracing::info;

/// Effective parameters for `request`. Call only after `request.validate()`.
pub fn resolve_parameters(request: &TrainingRequest, limits: &TrainingConfig) -> TrainingParameters {
    if request.use_sample_data {
        return TrainingParameters {
            min_support: request.min_support,
            min_confidence: request.min_confidence,
            max_itemset_size: request.max_itemset_size,
            sample_limit: Some(request.sample_size),
        };
    }

    let mut min_support = request.min_support;
    if min_support < limits.full_scan_min_support_floor {
        info!(
            requested = min_support,
            adjusted = limits.full_scan_min_support_floor,
            "[mb-03] Raising min_support for full scan"
        );
        min_support = limits.full_scan_min_support_floor;
    }

    let mut max_itemset_size = request.max_itemset_size;
    if max_itemset_size > limits.full_scan_max_itemset_size {
        info!(
            requested = max_itemset_size,
            adjusted = limits.full_scan_max_itemset_size,
            "[mb-03] Capping max_itemset_size for full scan"
        );
        max_itemset_size = limits.full_scan_max_itemset_size;
    }

    TrainingParameters {
        min_support,
        min_confidence: request.min_confidence,
        max_itemset_size,
        sample_limit: None,
    }
}
