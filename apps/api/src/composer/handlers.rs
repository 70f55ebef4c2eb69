//! Axum route handlers for the Prompt API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::composer::fitting::char_len;
use crate::composer::{
    build_initial_prompt, build_prompt, build_prompt_preview, translate_to_korean, Audience,
    PartialSelection, Selection,
};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub prompt: String,
    pub length: usize,
    pub max_chars: usize,
}

#[derive(Debug, Deserialize)]
pub struct InitialPromptRequest {
    pub topic: String,
    #[serde(default)]
    pub topic_detail: Option<String>,
    pub audience: Audience,
}

#[derive(Debug, Serialize)]
pub struct InitialPromptResponse {
    pub prompt: String,
    pub length: usize,
    pub min_chars: usize,
    pub max_chars: usize,
    pub within_band: bool,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub preview: String,
}

#[derive(Debug, Serialize)]
pub struct KoreanPromptResponse {
    pub prompt: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/prompts
///
/// Builds the final, length-clamped prompt for a complete selection.
pub async fn handle_build_prompt(
    State(state): State<AppState>,
    Json(selection): Json<Selection>,
) -> Result<Json<PromptResponse>, AppError> {
    require_topic(&selection.topic)?;

    let prompt = build_prompt(&selection, &state.limits);

    Ok(Json(PromptResponse {
        length: char_len(&prompt),
        max_chars: state.limits.max_chars,
        prompt,
    }))
}

/// POST /api/v1/prompts/initial
pub async fn handle_initial_prompt(
    State(state): State<AppState>,
    Json(request): Json<InitialPromptRequest>,
) -> Result<Json<InitialPromptResponse>, AppError> {
    require_topic(&request.topic)?;

    let band = &state.band;
    let prompt = build_initial_prompt(
        &request.topic,
        request.topic_detail.as_deref().unwrap_or_default(),
        &request.audience,
        band,
    );
    let length = char_len(&prompt);

    Ok(Json(InitialPromptResponse {
        prompt,
        length,
        min_chars: band.min_chars,
        max_chars: band.max_chars,
        within_band: band.contains(length),
    }))
}

/// POST /api/v1/prompts/preview
pub async fn handle_preview(Json(partial): Json<PartialSelection>) -> Json<PreviewResponse> {
    Json(PreviewResponse {
        preview: build_prompt_preview(&partial),
    })
}

/// POST /api/v1/prompts/korean
pub async fn handle_korean_prompt(
    Json(selection): Json<Selection>,
) -> Result<Json<KoreanPromptResponse>, AppError> {
    require_topic(&selection.topic)?;

    Ok(Json(KoreanPromptResponse {
        prompt: translate_to_korean(&selection),
    }))
}

fn require_topic(topic: &str) -> Result<(), AppError> {
    if topic.trim().is_empty() {
        return Err(AppError::Validation("topic cannot be empty".to_string()));
    }
    Ok(())
}
