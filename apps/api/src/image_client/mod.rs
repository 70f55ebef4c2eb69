/// Image Client — the single point of entry for all image-generation API calls.
///
/// No other module may call the image provider directly.
///
/// Model: dall-e-3, one HD image per request in the "natural" style.
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::catalog::Size;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// The model used for all image generation.
pub const MODEL: &str = "dall-e-3";
const QUALITY: &str = "hd";
const STYLE: &str = "natural";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Error codes the provider uses for failures that retrying cannot fix.
const CODE_INVALID_API_KEY: &str = "invalid_api_key";
const CODE_BILLING_LIMIT: &str = "billing_hard_limit_reached";
const CODE_INSUFFICIENT_QUOTA: &str = "insufficient_quota";

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Image providers a client may ask for. Only OpenAI is wired up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAi,
    Gemini,
}

impl Provider {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "openai" => Some(Provider::OpenAi),
            "gemini" => Some(Provider::Gemini),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No image URL returned from provider")]
    EmptyResult,
}

/// How a provider failure is reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidApiKey,
    BillingLimit,
    InsufficientQuota,
    Other,
}

impl FailureKind {
    pub fn status(self) -> u16 {
        match self {
            FailureKind::InvalidApiKey => 401,
            FailureKind::BillingLimit => 402,
            FailureKind::InsufficientQuota => 429,
            FailureKind::Other => 502,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            FailureKind::InvalidApiKey => "INVALID_API_KEY",
            FailureKind::BillingLimit => "BILLING_LIMIT_REACHED",
            FailureKind::InsufficientQuota => "INSUFFICIENT_QUOTA",
            FailureKind::Other => "IMAGE_PROVIDER_ERROR",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            FailureKind::InvalidApiKey => "API 키 오류",
            FailureKind::BillingLimit => "API 사용 한도 초과",
            FailureKind::InsufficientQuota => "API 크레딧 부족",
            FailureKind::Other => "Failed to generate image",
        }
    }

    /// Fixed guidance for known failures; `None` means the raw error is shown instead.
    pub fn details(self) -> Option<&'static str> {
        match self {
            FailureKind::InvalidApiKey => Some(
                "API 키가 유효하지 않습니다. 설정 페이지에서 올바른 API 키를 입력해주세요.",
            ),
            FailureKind::BillingLimit => Some(
                "OpenAI API 사용 한도가 초과되었습니다. 결제 정보를 업데이트하거나 다른 API 키를 사용해주세요.",
            ),
            FailureKind::InsufficientQuota => {
                Some("OpenAI API 크레딧이 부족합니다. 결제 정보를 확인해주세요.")
            }
            FailureKind::Other => None,
        }
    }
}

impl ImageError {
    /// The provider's machine-readable error code, if it sent one.
    pub fn code(&self) -> Option<&str> {
        match self {
            ImageError::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self.code() {
            Some(CODE_INVALID_API_KEY) => FailureKind::InvalidApiKey,
            Some(CODE_BILLING_LIMIT) => FailureKind::BillingLimit,
            Some(CODE_INSUFFICIENT_QUOTA) => FailureKind::InsufficientQuota,
            _ => FailureKind::Other,
        }
    }

    /// User-facing explanation: fixed text for known failures, the error itself otherwise.
    pub fn details(&self) -> String {
        self.kind()
            .details()
            .map(str::to_string)
            .unwrap_or_else(|| self.to_string())
    }
}

#[derive(Debug, Serialize)]
struct ImageRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u32,
    size: &'a str,
    quality: &'a str,
    style: &'a str,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    url: Option<String>,
    revised_prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
    code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedImage {
    pub url: String,
    pub revised_prompt: Option<String>,
}

/// Pixel size requested from the provider for a catalog aspect ratio.
pub fn provider_size(size: Size) -> &'static str {
    match size {
        Size::Landscape => "1792x1024",
        Size::Portrait => "1024x1792",
        Size::Square => "1024x1024",
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// Wraps the OpenAI images endpoint with retry logic.
#[derive(Clone)]
pub struct ImageClient {
    client: Client,
    base_url: String,
    max_attempts: u32,
    retry_delay: Duration,
}

impl ImageClient {
    pub fn new(
        base_url: impl Into<String>,
        max_attempts: u32,
        retry_delay: Duration,
    ) -> Result<Self, ImageError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            max_attempts: max_attempts.max(1),
            retry_delay,
        })
    }

    /// Generates one image for `prompt`.
    ///
    /// Retries transport errors, 5xx and plain rate limiting with exponential
    /// backoff. Credential, billing and quota failures are returned at once.
    pub async fn generate(
        &self,
        api_key: &str,
        prompt: &str,
        size: Size,
    ) -> Result<GeneratedImage, ImageError> {
        let request_body = ImageRequest {
            model: MODEL,
            prompt,
            n: 1,
            size: provider_size(size),
            quality: QUALITY,
            style: STYLE,
        };
        let url = format!("{}/images/generations", self.base_url);

        let mut last_error: Option<ImageError> = None;

        for attempt in 0..self.max_attempts {
            if attempt > 0 {
                let delay = backoff_delay(self.retry_delay, attempt);
                warn!(
                    "Image call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&url)
                .bearer_auth(api_key)
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(ImageError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if !status.is_success() {
                let body = match response.text().await {
                    Ok(body) => body,
                    Err(e) => {
                        warn!("Failed to read image API error body ({status}): {e}");
                        String::new()
                    }
                };
                let error = api_error(status.as_u16(), body);
                let retryable = status.is_server_error()
                    || (status.as_u16() == 429 && error.kind() == FailureKind::Other);
                warn!("Image API returned {}: {}", status, error);
                if retryable {
                    last_error = Some(error);
                    continue;
                }
                return Err(error);
            }

            let image_response: ImageResponse = response.json().await?;
            let first = image_response
                .data
                .into_iter()
                .next()
                .ok_or(ImageError::EmptyResult)?;
            let image_url = first.url.ok_or(ImageError::EmptyResult)?;

            debug!("Image call succeeded on attempt {}", attempt + 1);
            info!("Image generated ({})", provider_size(size));

            return Ok(GeneratedImage {
                url: image_url,
                revised_prompt: first.revised_prompt,
            });
        }

        Err(last_error.unwrap_or(ImageError::EmptyResult))
    }
}

/// `base * 2^(attempt - 1)`, saturating instead of overflowing.
fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
    base.saturating_mul(factor)
}

fn api_error(status: u16, body: String) -> ImageError {
    match serde_json::from_str::<ProviderError>(&body) {
        Ok(parsed) => ImageError::Api {
            status,
            code: parsed.error.code,
            message: parsed.error.message,
        },
        Err(_) => ImageError::Api {
            status,
            code: None,
            message: body,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn client(server: &mockito::Server) -> ImageClient {
        ImageClient::new(server.url(), 3, Duration::from_millis(1)).unwrap()
    }

    fn error_body(code: &str) -> String {
        json!({"error": {"message": "provider said no", "type": "invalid_request_error", "code": code}})
            .to_string()
    }

    #[test]
    fn test_backoff_doubles_and_saturates() {
        let base = Duration::from_millis(1000);
        assert_eq!(backoff_delay(base, 1), Duration::from_millis(1000));
        assert_eq!(backoff_delay(base, 2), Duration::from_millis(2000));
        assert_eq!(backoff_delay(base, 4), Duration::from_millis(8000));
        // Past 2^31 the factor stops growing instead of overflowing.
        assert_eq!(backoff_delay(base, 40), backoff_delay(base, 33));
        assert_eq!(backoff_delay(Duration::MAX, 3), Duration::MAX);
    }

    #[test]
    fn test_provider_size_mapping() {
        assert_eq!(provider_size(Size::Landscape), "1792x1024");
        assert_eq!(provider_size(Size::Portrait), "1024x1792");
        assert_eq!(provider_size(Size::Square), "1024x1024");
    }

    #[test]
    fn test_provider_parse() {
        assert_eq!(Provider::parse("openai"), Some(Provider::OpenAi));
        assert_eq!(Provider::parse("gemini"), Some(Provider::Gemini));
        assert_eq!(Provider::parse("midjourney"), None);
    }

    #[test]
    fn test_failure_kinds_follow_provider_codes() {
        let err = |code: Option<&str>| ImageError::Api {
            status: 400,
            code: code.map(str::to_string),
            message: "m".to_string(),
        };
        assert_eq!(err(Some("invalid_api_key")).kind(), FailureKind::InvalidApiKey);
        assert_eq!(err(Some("billing_hard_limit_reached")).kind(), FailureKind::BillingLimit);
        assert_eq!(err(Some("insufficient_quota")).kind(), FailureKind::InsufficientQuota);
        assert_eq!(err(Some("content_policy_violation")).kind(), FailureKind::Other);
        assert_eq!(err(None).details(), "API error (status 400): m");
        assert_eq!(FailureKind::BillingLimit.status(), 402);
    }

    #[tokio::test]
    async fn test_generate_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/images/generations")
            .match_header("authorization", "Bearer sk-test")
            .match_body(Matcher::PartialJson(json!({
                "model": "dall-e-3",
                "n": 1,
                "size": "1792x1024",
                "quality": "hd",
                "style": "natural"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "created": 1,
                    "data": [{"url": "https://img.example/1.png", "revised_prompt": "revised"}]
                })
                .to_string(),
            )
            .expect(1)
            .create_async()
            .await;

        let image = client(&server)
            .generate("sk-test", "draw it", Size::Landscape)
            .await
            .unwrap();

        assert_eq!(image.url, "https://img.example/1.png");
        assert_eq!(image.revised_prompt.as_deref(), Some("revised"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_retries_server_errors() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/images/generations")
            .with_status(500)
            .with_body(r#"{"error":{"message":"upstream down","code":null}}"#)
            .expect(3)
            .create_async()
            .await;

        let result = client(&server).generate("sk-test", "p", Size::Square).await;

        match result {
            Err(ImageError::Api { status, message, .. }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "upstream down");
            }
            other => panic!("unexpected result: {other:?}"),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_plain_rate_limit_is_retried() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/images/generations")
            .with_status(429)
            .with_body(error_body("rate_limit_exceeded"))
            .expect(3)
            .create_async()
            .await;

        let result = client(&server).generate("sk-test", "p", Size::Square).await;
        assert!(result.is_err());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_quota_failure_is_not_retried() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/images/generations")
            .with_status(429)
            .with_body(error_body("insufficient_quota"))
            .expect(1)
            .create_async()
            .await;

        let err = client(&server)
            .generate("sk-test", "p", Size::Square)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::InsufficientQuota);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_invalid_key_fails_fast() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/images/generations")
            .with_status(401)
            .with_body(error_body("invalid_api_key"))
            .expect(1)
            .create_async()
            .await;

        let err = client(&server)
            .generate("sk-bad", "p", Size::Portrait)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::InvalidApiKey);
        assert_eq!(err.code(), Some("invalid_api_key"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_plain_text_error_body_becomes_message() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/images/generations")
            .with_status(400)
            .with_body("upstream rejected the request")
            .create_async()
            .await;

        let err = client(&server)
            .generate("sk-test", "p", Size::Square)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::Other);
        assert_eq!(err.code(), None);
        assert!(err.to_string().contains("upstream rejected the request"));
    }

    #[tokio::test]
    async fn test_empty_data_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/images/generations")
            .with_status(200)
            .with_body(r#"{"created": 1, "data": []}"#)
            .create_async()
            .await;

        let err = client(&server)
            .generate("sk-test", "p", Size::Square)
            .await
            .unwrap_err();
        assert!(matches!(err, ImageError::EmptyResult));
    }
}
