use std::sync::Arc;

use axum::extract::State;
use styler_api::{
    config::AppConfig, routes::health::health_check, state::AppState, storage::MemStorage,
};

#[tokio::test]
async fn health_check_returns_ok() {
    let state = AppState::new(Arc::new(MemStorage::new()), AppConfig::for_tests());
    let response = health_check(State(state)).await;
    assert_eq!(response.0.message, "Health check");

    let data = response.0.data.expect("health data");
    assert_eq!(data.status, "ok");
    assert_eq!(data.storage, "memory");
}
