use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Reports the service version and which backends are wired in.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let history = if state.config.database_url.is_some() {
        "postgres"
    } else {
        "memory"
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "thinkdraw-api",
        "history": history,
        "server_key": state.config.openai_api_key.is_some()
    }))
}
