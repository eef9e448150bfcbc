//! # Market Basket Runtime
//!
//! Trains a model over the configured transaction files and prints the
//! training summary, model status and dashboard as JSON. Any command-line
//! arguments are treated as a basket and answered with recommendations.
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging (`RUST_LOG`, default `info`)
//! 2. Load and validate configuration
//! 3. Train (Ctrl+C cancels between chunks and levels)
//! 4. Print payloads

use anyhow::{Context, Result};
use basket_runtime::{load_config, BasketRuntime};
use serde::Serialize;
use shared_types::CancellationToken;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn print_json<T: Serialize>(label: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).with_context(|| format!("serializing {label}"))?;
    println!("{json}");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    // Load configuration
    let config = load_config()?;
    config.validate().context("invalid configuration")?;

    let runtime = BasketRuntime::new(config);
    let cancel = CancellationToken::new();

    // Ctrl+C trips the cancellation token; the run stops at its next checkpoint
    let ctrl_c_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Ctrl+C received, cancelling training");
            ctrl_c_token.cancel();
        }
    });

    info!("Training started. Press Ctrl+C to cancel.");
    let trained = match runtime.train(runtime.default_request(), cancel).await {
        Ok(response) => response,
        Err(e) => {
            error!(error = %e, "Training failed");
            return Err(e);
        }
    };
    print_json("training summary", &trained)?;

    let handler = runtime.handler();
    print_json("status", &handler.handle_status())?;
    print_json("dashboard", &handler.handle_dashboard()?)?;

    let basket: Vec<String> = std::env::args().skip(1).collect();
    if !basket.is_empty() {
        print_json("recommendations", &runtime.recommend(basket)?)?;
    }

    Ok(())
}
