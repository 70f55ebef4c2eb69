//! Axum route handlers for the History API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::history::{HistoryItem, NewHistoryItem};
use crate::state::AppState;

/// GET /api/v1/history
///
/// Most recent first.
pub async fn handle_list_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<HistoryItem>>, AppError> {
    Ok(Json(state.history.list().await?))
}

/// POST /api/v1/history
pub async fn handle_create_history(
    State(state): State<AppState>,
    Json(request): Json<NewHistoryItem>,
) -> Result<(StatusCode, Json<HistoryItem>), AppError> {
    if request.image_url.trim().is_empty() {
        return Err(AppError::Validation("image_url cannot be empty".to_string()));
    }

    let item = state.history.save(request).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/v1/history/:id
pub async fn handle_get_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<HistoryItem>, AppError> {
    state
        .history
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("History item {id} not found")))
}

/// DELETE /api/v1/history/:id
pub async fn handle_delete_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.history.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("History item {id} not found")))
    }
}

/// DELETE /api/v1/history
pub async fn handle_clear_history(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.history.clear().await?;
    Ok(StatusCode::NO_CONTENT)
}
