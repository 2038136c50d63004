//! Health check endpoints

use axum::{extract::State, routing::get, Json, Router};
use domain_inventory::ProductRepository;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct ReadyResponse {
    status: String,
    store: bool,
}

/// Create a readiness check router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - verifies the product store answers
async fn readiness_check(State(state): State<AppState>) -> Json<ReadyResponse> {
    let store_healthy = state.repository.list_all().await.is_ok();

    Json(ReadyResponse {
        status: if store_healthy { "ready" } else { "unhealthy" }.to_string(),
        store: store_healthy,
    })
}
