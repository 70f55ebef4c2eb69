//! Axum route handlers for the Image API.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::generator::{
    check_generate_request, create_image, CreationRequest, CreationResponse, GenerateImageRequest,
};
use crate::image_client::provider_size;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateImageResponse {
    pub success: bool,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revised_prompt: Option<String>,
}

/// POST /api/v1/images/generate
///
/// Sends an already-built prompt to the provider. Provider failures are
/// returned as errors with a user-facing explanation.
pub async fn handle_generate_image(
    State(state): State<AppState>,
    Json(request): Json<GenerateImageRequest>,
) -> Result<Json<GenerateImageResponse>, AppError> {
    let checked = check_generate_request(&request, state.config.openai_api_key.as_deref())?;
    let prompt = request.prompt.as_deref().unwrap_or_default();

    info!(
        "Generating image: size={}, prompt_length={}",
        provider_size(checked.size),
        prompt.chars().count()
    );

    let image = state
        .images
        .generate(checked.api_key, prompt, checked.size)
        .await?;

    Ok(Json(GenerateImageResponse {
        success: true,
        image_url: image.url,
        revised_prompt: image.revised_prompt,
    }))
}

/// POST /api/v1/creations
///
/// Full flow: compose → generate → record. Falls back to a placeholder image
/// instead of failing when the provider cannot be used.
pub async fn handle_create(
    State(state): State<AppState>,
    Json(request): Json<CreationRequest>,
) -> Result<Json<CreationResponse>, AppError> {
    let response = create_image(
        &state.images,
        state.history.as_ref(),
        &state.limits,
        state.config.openai_api_key.as_deref(),
        request,
    )
    .await?;

    Ok(Json(response))
}
