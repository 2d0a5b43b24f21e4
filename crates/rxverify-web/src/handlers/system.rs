//! Service status endpoints.

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;

use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub dataset_size: usize,
    pub model: String,
}

/// GET /api/health — liveness plus a glance at the loaded state.
pub async fn health(State(state): State<SharedState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        dataset_size: state.dataset.len(),
        model: state.extractor.model_id().to_string(),
    })
}
