//! Readiness endpoint

use axum::{routing::get, Json, Router};
use axum_helpers::{run_health_checks, HealthCheckFuture};
use serde_json::Value;

use crate::state::AppState;

async fn ready(
    state: AppState,
) -> Result<(axum::http::StatusCode, Json<Value>), (axum::http::StatusCode, Json<Value>)> {
    let checks: Vec<(&str, HealthCheckFuture)> = vec![
        (
            "database",
            Box::pin(async {
                state
                    .db
                    .list_collection_names()
                    .await
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            }),
        ),
        (
            "catalog",
            Box::pin(async {
                let snapshot = state.catalog.snapshot().await;
                match snapshot.error {
                    Some(e) if snapshot.products.is_empty() => Err(e),
                    _ => Ok(()),
                }
            }),
        ),
    ];

    run_health_checks(checks).await
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/ready", get(move || ready(state)))
}
