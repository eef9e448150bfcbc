//! Configuration loading
//!
//! Defaults, then an optional JSON file named by `MB_CONFIG`, then individual
//! `MB_*` environment overrides. An override that does not parse is logged
//! and ignored; a config file that cannot be read or parsed is an error.

use anyhow::{Context, Result};
use mb_03_model_service::BasketConfig;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

pub const CONFIG_FILE_VAR: &str = "MB_CONFIG";

/// Load configuration from the process environment.
pub fn load_config() -> Result<BasketConfig> {
    let env = |key: &str| std::env::var(key).ok();

    let config = match env(CONFIG_FILE_VAR) {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config file {}", path))?;
            let config: BasketConfig = serde_json::from_str(&raw)
                .with_context(|| format!("parsing config file {}", path))?;
            info!(path = %path, "Loaded configuration file");
            config
        }
        None => BasketConfig::default(),
    };

    Ok(apply_env_overrides(config, env))
}

/// Apply `MB_*` overrides using `lookup` to read variables.
pub fn apply_env_overrides<F>(mut config: BasketConfig, lookup: F) -> BasketConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = lookup("MB_HEADER_PATH") {
        config.ingestion.header_path = PathBuf::from(path);
    }
    if let Some(path) = lookup("MB_DETAIL_PATH") {
        config.ingestion.detail_path = PathBuf::from(path);
    }
    if let Some(path) = lookup("MB_PRODUCT_NAMES") {
        config.names.product_names_path = Some(PathBuf::from(path));
    }

    override_parsed(&lookup, "MB_MIN_SUPPORT", &mut config.training.min_support);
    override_parsed(&lookup, "MB_MIN_CONFIDENCE", &mut config.training.min_confidence);
    override_parsed(&lookup, "MB_MAX_ITEMSET_SIZE", &mut config.training.max_itemset_size);
    override_parsed(&lookup, "MB_SAMPLE_SIZE", &mut config.training.sample_size);
    override_parsed(&lookup, "MB_USE_SAMPLE_DATA", &mut config.training.use_sample_data);

    config
}

fn override_parsed<F, T>(lookup: &F, key: &str, target: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.trim().parse() {
        Ok(value) => *target = value,
        Err(_) => warn!(key, value = %raw, "Ignoring unparsable environment override"),
    }
}
