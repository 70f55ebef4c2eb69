pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::composer::handlers as prompts;
use crate::generation::handlers as images;
use crate::history::handlers as history;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/catalog", get(catalog::handle_get_catalog))
        // Prompt API
        .route("/api/v1/prompts", post(prompts::handle_build_prompt))
        .route("/api/v1/prompts/initial", post(prompts::handle_initial_prompt))
        .route("/api/v1/prompts/preview", post(prompts::handle_preview))
        .route("/api/v1/prompts/korean", post(prompts::handle_korean_prompt))
        // Image API
        .route("/api/v1/images/generate", post(images::handle_generate_image))
        .route("/api/v1/creations", post(images::handle_create))
        // History API
        .route(
            "/api/v1/history",
            get(history::handle_list_history)
                .post(history::handle_create_history)
                .delete(history::handle_clear_history),
        )
        .route(
            "/api/v1/history/:id",
            get(history::handle_get_history).delete(history::handle_delete_history),
        )
        .with_state(state)
}
