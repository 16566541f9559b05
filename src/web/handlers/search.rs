use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::error::AppError;
use crate::models::SearchResult;
use crate::web::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
    pub k: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub k: usize,
    pub results: Vec<SearchResult>,
    pub duration_ms: u64,
}

pub async fn search_posters(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    let k = match params.k {
        None => state.default_k,
        Some(k) if k <= 0 => {
            return Err(AppError::BadRequest("k must be a positive integer".to_string()))
        }
        Some(k) if k as u64 > state.max_k as u64 => {
            return Err(AppError::BadRequest(format!(
                "k must not exceed {}",
                state.max_k
            )))
        }
        Some(k) => k as usize,
    };

    let started = Instant::now();
    let results = state.engine.search(&params.q, k).await?;

    Ok(Json(SearchResponse {
        query: params.q,
        k,
        results,
        duration_ms: started.elapsed().as_millis() as u64,
    }))
}
