use axum::{
    routing::{get, post},
    Router,
};

use crate::web::handlers;
use crate::web::state::AppState;

pub fn create_routes(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/search", get(handlers::search_posters))
        .route("/health", get(handlers::health_check))
        .route("/reload", post(handlers::reload_store));

    Router::new().nest("/api", api_routes).with_state(state)
}
