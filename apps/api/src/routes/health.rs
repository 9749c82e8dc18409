use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Service version, configured completion model and retained analysis count.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "screener-api",
        "version": env!("CARGO_PKG_VERSION"),
        "completion_model": state.config.completion_model,
        "analyses_retained": state.sessions.len().await,
    }))
}
