pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::screening::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/analyses", post(handlers::handle_create_analysis))
        .route(
            "/api/v1/analyses/:id/report",
            get(handlers::handle_get_report),
        )
        .route(
            "/api/v1/analyses/:id/ranking.csv",
            get(handlers::handle_download_ranking),
        )
        .with_state(state)
}
