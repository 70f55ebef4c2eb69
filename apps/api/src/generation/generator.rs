//! Image Generation — request checks and the creation flow.
//!
//! Flow: compose prompt → check provider and key → generate → record history.
//!
//! The creation flow never fails on provider trouble: a missing key, an
//! unsupported provider or a failed call all fall back to the placeholder
//! image for the chosen style and size, with a notice saying why.

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::catalog::placeholder::placeholder_image;
use crate::catalog::{CatalogOption, Size};
use crate::composer::fitting::char_len;
use crate::composer::{build_prompt, PromptLimits, Selection};
use crate::errors::AppError;
use crate::history::HistoryStore;
use crate::image_client::{GeneratedImage, ImageClient, Provider};
use crate::models::history::NewHistoryItem;

const OPENAI_KEY_PREFIX: &str = "sk-";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Request body for a raw image generation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GenerateImageRequest {
    pub prompt: Option<String>,
    pub size: Option<String>,
    pub provider: Option<String>,
    pub api_key: Option<String>,
}

/// Request body for the full creation flow.
#[derive(Debug, Clone, Deserialize)]
pub struct CreationRequest {
    pub selection: Selection,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    Generated,
    Placeholder,
}

/// Why a placeholder was returned instead of a generated image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&AppError> for Notice {
    fn from(error: &AppError) -> Self {
        let body = error.body();
        Self {
            code: body.code.to_string(),
            message: body.message,
            details: body.details,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreationResponse {
    pub prompt: String,
    pub prompt_length: usize,
    pub image_url: String,
    pub revised_prompt: Option<String>,
    pub source: ImageSource,
    pub notice: Option<Notice>,
    pub history_id: Option<Uuid>,
}

/// A request that passed every check and can be sent to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedRequest<'a> {
    pub api_key: &'a str,
    pub size: Size,
}

// ────────────────────────────────────────────────────────────────────────────
// Checks
// ────────────────────────────────────────────────────────────────────────────

/// The request's key when it has one, the server's otherwise.
pub fn resolve_api_key<'a>(
    request_key: Option<&'a str>,
    server_key: Option<&'a str>,
) -> Option<&'a str> {
    request_key
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .or_else(|| server_key.map(str::trim).filter(|k| !k.is_empty()))
}

/// Checks provider and credentials, in this order: key present, provider
/// supported, key well-formed.
pub fn check_provider<'a>(provider: &str, api_key: Option<&'a str>) -> Result<&'a str, AppError> {
    let Some(api_key) = api_key else {
        return Err(AppError::Unauthorized(
            "API key is required. Please set your API key in Settings.".to_string(),
        ));
    };

    match Provider::parse(provider) {
        Some(Provider::Gemini) => Err(AppError::NotImplemented {
            message: "Gemini 이미지 생성 기능은 준비 중입니다".to_string(),
            details: "Google Gemini API는 현재 텍스트 생성만 지원합니다. OpenAI (DALL-E 3)를 사용해주세요."
                .to_string(),
        }),
        Some(Provider::OpenAi) if !api_key.starts_with(OPENAI_KEY_PREFIX) => {
            Err(AppError::Unauthorized(
                "Invalid API key format. OpenAI API keys should start with \"sk-\"".to_string(),
            ))
        }
        Some(Provider::OpenAi) => Ok(api_key),
        None => Err(AppError::Validation(format!(
            "Unsupported provider: {provider}"
        ))),
    }
}

/// Validates a raw generation request against the server's fallback key.
pub fn check_generate_request<'a>(
    request: &'a GenerateImageRequest,
    server_key: Option<&'a str>,
) -> Result<CheckedRequest<'a>, AppError> {
    if request.prompt.as_deref().map_or(true, |p| p.trim().is_empty()) {
        return Err(AppError::Validation("Prompt is required".to_string()));
    }
    let Some(provider) = request.provider.as_deref().filter(|p| !p.is_empty()) else {
        return Err(AppError::Validation("Provider is required".to_string()));
    };

    let api_key = check_provider(
        provider,
        resolve_api_key(request.api_key.as_deref(), server_key),
    )?;

    // Anything other than a known portrait or landscape ratio is drawn square.
    let size = request
        .size
        .as_deref()
        .and_then(Size::from_id)
        .unwrap_or(Size::Square);

    Ok(CheckedRequest { api_key, size })
}

// ────────────────────────────────────────────────────────────────────────────
// Creation flow
// ────────────────────────────────────────────────────────────────────────────

/// Composes the prompt for `request.selection` and turns it into an image.
pub async fn create_image(
    images: &ImageClient,
    history: &dyn HistoryStore,
    limits: &PromptLimits,
    server_key: Option<&str>,
    request: CreationRequest,
) -> Result<CreationResponse, AppError> {
    let selection = request.selection;
    if selection.topic.trim().is_empty() {
        return Err(AppError::Validation("topic cannot be empty".to_string()));
    }

    let prompt = build_prompt(&selection, limits);
    let provider = request.provider.as_deref().unwrap_or("openai");

    info!(
        "Creating image: style={}, size={}, provider={}, prompt_length={}",
        selection.style.id(),
        selection.size.id(),
        provider,
        char_len(&prompt)
    );

    let outcome = match check_provider(
        provider,
        resolve_api_key(request.api_key.as_deref(), server_key),
    ) {
        Ok(api_key) => images
            .generate(api_key, &prompt, selection.size)
            .await
            .map_err(AppError::from),
        Err(e) => Err(e),
    };

    match outcome {
        Ok(GeneratedImage {
            url,
            revised_prompt,
        }) => {
            let history_id = record(history, &selection, &prompt, &url).await;
            Ok(CreationResponse {
                prompt_length: char_len(&prompt),
                prompt,
                image_url: url,
                revised_prompt,
                source: ImageSource::Generated,
                notice: None,
                history_id,
            })
        }
        Err(e) => {
            warn!("Falling back to placeholder image: {e}");
            Ok(CreationResponse {
                prompt_length: char_len(&prompt),
                prompt,
                image_url: placeholder_image(selection.style, selection.size).to_string(),
                revised_prompt: None,
                source: ImageSource::Placeholder,
                notice: Some(Notice::from(&e)),
                history_id: None,
            })
        }
    }
}

/// Saves a generated image to history. A failed save is logged, not returned.
async fn record(
    history: &dyn HistoryStore,
    selection: &Selection,
    prompt: &str,
    image_url: &str,
) -> Option<Uuid> {
    let item = NewHistoryItem {
        selection: selection.clone(),
        prompt: prompt.to_string(),
        image_url: image_url.to_string(),
    };
    match history.save(item).await {
        Ok(saved) => {
            info!("Image saved to history: {}", saved.id);
            Some(saved.id)
        }
        Err(e) => {
            error!("Failed to save image to history: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::http::StatusCode;
    use serde_json::json;

    use super::*;
    use crate::catalog::{Decoration, Language, Style, Tool};
    use crate::composer::Audience;
    use crate::history::MemoryHistoryStore;

    fn selection() -> Selection {
        Selection {
            topic: "광합성".to_string(),
            topic_detail: None,
            audience: Audience::age("teens"),
            style: Style::Infographic,
            tool: Tool::Marker,
            size: Size::Portrait,
            language: Language::Korean,
            decoration: Decoration::Flower,
        }
    }

    fn request(provider: Option<&str>, api_key: Option<&str>) -> CreationRequest {
        CreationRequest {
            selection: selection(),
            provider: provider.map(str::to_string),
            api_key: api_key.map(str::to_string),
        }
    }

    fn client(url: &str) -> ImageClient {
        ImageClient::new(url, 1, Duration::from_millis(1)).unwrap()
    }

    fn status_of(result: Result<CheckedRequest<'_>, AppError>) -> StatusCode {
        result.unwrap_err().body().status
    }

    // ── checks ───────────────────────────────────────────────────────────────

    #[test]
    fn test_request_key_wins_over_server_key() {
        assert_eq!(resolve_api_key(Some("sk-user"), Some("sk-server")), Some("sk-user"));
        assert_eq!(resolve_api_key(Some(" "), Some("sk-server")), Some("sk-server"));
        assert_eq!(resolve_api_key(None, None), None);
    }

    #[test]
    fn test_generate_request_checks_in_order() {
        let mut req = GenerateImageRequest::default();
        assert_eq!(status_of(check_generate_request(&req, None)), StatusCode::BAD_REQUEST);

        req.prompt = Some("draw".to_string());
        assert_eq!(status_of(check_generate_request(&req, None)), StatusCode::BAD_REQUEST);

        req.provider = Some("gemini".to_string());
        assert_eq!(status_of(check_generate_request(&req, None)), StatusCode::UNAUTHORIZED);
        assert_eq!(
            status_of(check_generate_request(&req, Some("sk-server"))),
            StatusCode::NOT_IMPLEMENTED
        );

        req.provider = Some("openai".to_string());
        req.api_key = Some("pk-wrong".to_string());
        assert_eq!(status_of(check_generate_request(&req, None)), StatusCode::UNAUTHORIZED);

        req.provider = Some("stable-diffusion".to_string());
        assert_eq!(status_of(check_generate_request(&req, None)), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_valid_request_maps_size() {
        let req = GenerateImageRequest {
            prompt: Some("draw".to_string()),
            size: Some("9:16".to_string()),
            provider: Some("openai".to_string()),
            api_key: None,
        };
        let checked = check_generate_request(&req, Some("sk-server")).unwrap();
        assert_eq!(checked, CheckedRequest { api_key: "sk-server", size: Size::Portrait });

        let odd = GenerateImageRequest {
            size: Some("4:3".to_string()),
            ..req
        };
        assert_eq!(check_generate_request(&odd, Some("sk-server")).unwrap().size, Size::Square);
    }

    // ── creation flow ────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_missing_key_returns_placeholder() {
        let history = MemoryHistoryStore::new(10);
        let response = create_image(
            &client("http://127.0.0.1:9"),
            &history,
            &PromptLimits::default(),
            None,
            request(None, None),
        )
        .await
        .unwrap();

        assert_eq!(response.source, ImageSource::Placeholder);
        assert_eq!(
            response.image_url,
            placeholder_image(Style::Infographic, Size::Portrait)
        );
        assert_eq!(response.notice.unwrap().code, "UNAUTHORIZED");
        assert!(response.prompt.starts_with("Identify and explain 광합성."));
        assert!(history.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unsupported_provider_returns_placeholder() {
        let history = MemoryHistoryStore::new(10);
        let response = create_image(
            &client("http://127.0.0.1:9"),
            &history,
            &PromptLimits::default(),
            Some("sk-server"),
            request(Some("gemini"), None),
        )
        .await
        .unwrap();

        assert_eq!(response.source, ImageSource::Placeholder);
        let notice = response.notice.unwrap();
        assert_eq!(notice.code, "NOT_IMPLEMENTED");
        assert!(notice.details.is_some());
    }

    #[tokio::test]
    async fn test_provider_failure_returns_placeholder_with_reason() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/images/generations")
            .with_status(429)
            .with_body(
                json!({"error": {"message": "quota", "code": "insufficient_quota"}}).to_string(),
            )
            .create_async()
            .await;

        let history = MemoryHistoryStore::new(10);
        let response = create_image(
            &client(&server.url()),
            &history,
            &PromptLimits::default(),
            None,
            request(Some("openai"), Some("sk-user")),
        )
        .await
        .unwrap();

        assert_eq!(response.source, ImageSource::Placeholder);
        let notice = response.notice.unwrap();
        assert_eq!(notice.code, "INSUFFICIENT_QUOTA");
        assert_eq!(notice.message, "API 크레딧 부족");
        assert!(history.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_success_is_recorded_in_history() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/images/generations")
            .match_header("authorization", "Bearer sk-server")
            .with_status(200)
            .with_body(json!({"data": [{"url": "https://img.example/ok.png"}]}).to_string())
            .create_async()
            .await;

        let history = MemoryHistoryStore::new(10);
        let response = create_image(
            &client(&server.url()),
            &history,
            &PromptLimits::default(),
            Some("sk-server"),
            request(None, None),
        )
        .await
        .unwrap();

        assert_eq!(response.source, ImageSource::Generated);
        assert_eq!(response.image_url, "https://img.example/ok.png");
        assert!(response.notice.is_none());

        let items = history.list().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(Some(items[0].id), response.history_id);
        assert_eq!(items[0].prompt, response.prompt);
        assert_eq!(items[0].selection, selection());
    }

    #[tokio::test]
    async fn test_blank_topic_is_rejected() {
        let history = MemoryHistoryStore::new(10);
        let mut req = request(None, Some("sk-user"));
        req.selection.topic = "   ".to_string();
        let err = create_image(
            &client("http://127.0.0.1:9"),
            &history,
            &PromptLimits::default(),
            None,
            req,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
