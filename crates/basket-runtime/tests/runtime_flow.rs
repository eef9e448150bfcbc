//! # Runtime Flow Tests
//!
//! Train through the runtime on file-backed sources, on a blocking worker.

use basket_runtime::{apply_env_overrides, BasketRuntime};
use mb_03_model_service::{BasketConfig, BasketError, TrainingRequest};
use shared_types::CancellationToken;
use std::collections::HashMap;
use std::path::Path;

fn write_fixture(dir: &Path) {
    std::fs::write(dir.join("header.csv"), "voucher_id\nT1\nT2\nT3\nT4\n").unwrap();
    std::fs::write(
        dir.join("detail.csv"),
        "voucher_id,item_no\nT1,A\nT1,B\nT2,A\nT2,B\nT3,A\nT3,C\nT4,B\nT4,C\n",
    )
    .unwrap();
    std::fs::write(dir.join("names.csv"), "ProductID,ProductName\nA,Apple\nB,Bread\n").unwrap();
}

fn config_for(dir: &Path) -> BasketConfig {
    let vars: HashMap<&str, String> = HashMap::from([
        ("MB_HEADER_PATH", dir.join("header.csv").display().to_string()),
        ("MB_DETAIL_PATH", dir.join("detail.csv").display().to_string()),
        ("MB_PRODUCT_NAMES", dir.join("names.csv").display().to_string()),
        ("MB_MIN_SUPPORT", "0.5".to_string()),
        ("MB_MAX_ITEMSET_SIZE", "2".to_string()),
    ]);
    apply_env_overrides(BasketConfig::default(), |key| vars.get(key).cloned())
}

#[tokio::test]
async fn train_then_recommend_with_names() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    let runtime = BasketRuntime::new(config_for(dir.path()));

    let request = runtime.default_request();
    assert_eq!(request.min_support, 0.5);

    let trained = runtime.train(request, CancellationToken::new()).await.unwrap();
    assert_eq!(trained.transactions_count, 4);
    assert_eq!(trained.rules_count, 2);

    let response = runtime.recommend(vec!["a".to_string()]).unwrap();
    assert_eq!(response.input_names, vec!["Apple"]);
    assert_eq!(response.recommendations[0].id, "B");
    assert_eq!(response.recommendations[0].name, "Bread");

    let status = runtime.handler().handle_status();
    assert!(status.model_trained);
}

#[tokio::test]
async fn cancelled_run_surfaces_cancelled() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    let runtime = BasketRuntime::new(config_for(dir.path()));

    let cancel = CancellationToken::new();
    cancel.cancel();
    let err = runtime
        .train(runtime.default_request(), cancel)
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<BasketError>(),
        Some(BasketError::Cancelled)
    ));
    assert!(!runtime.handler().handle_status().model_trained);
}

#[tokio::test]
async fn invalid_request_fails_before_reading() {
    let dir = tempfile::tempdir().unwrap();
    let runtime = BasketRuntime::new(config_for(dir.path()));
    let request = TrainingRequest {
        min_support: 1.1,
        ..Default::default()
    };

    let err = runtime
        .train(request, CancellationToken::new())
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<BasketError>(),
        Some(BasketError::InvalidParameter { .. })
    ));
}

#[test]
fn untrained_recommend_is_model_not_trained() {
    let dir = tempfile::tempdir().unwrap();
    let runtime = BasketRuntime::new(config_for(dir.path()));
    let err = runtime.recommend(vec!["A".to_string()]).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<BasketError>(),
        Some(BasketError::ModelNotTrained)
    ));
}
