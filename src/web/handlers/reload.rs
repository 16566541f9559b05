use axum::{extract::State, Json};

use super::error::AppError;
use crate::store::StoreStats;
use crate::web::state::AppState;

/// Re-read the configured artifact and swap it in if it validates.
pub async fn reload_store(State(state): State<AppState>) -> Result<Json<StoreStats>, AppError> {
    let stats = state.engine.reload(&state.store_path).await?;
    Ok(Json(stats))
}
