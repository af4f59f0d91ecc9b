use axum::extract::State;
use axum::{routing::get, Json, Router};
use giftbox_db::repositories::GiftBoxRepo;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
    /// Whether the `kids_gift_boxes` table exists.
    pub schema_ready: bool,
}

/// GET /health -- reports `ok` only when the gift box table can be served.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = giftbox_db::health_check(&state.pool).await.is_ok();
    let schema_ready = db_healthy
        && GiftBoxRepo::table_exists(&state.pool)
            .await
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "Schema lookup failed");
                false
            });

    let status = if schema_ready { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        schema_ready,
    })
}

/// Mount health check routes at the root level.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
