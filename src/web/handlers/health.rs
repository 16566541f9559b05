use axum::{extract::State, Json};
use serde::Serialize;

use crate::store::StoreStats;
use crate::web::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model: String,
    pub store: StoreStats,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        model: state.engine.model_name().to_string(),
        store: state.engine.stats(),
    })
}
