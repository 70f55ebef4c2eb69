use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::image_client::ImageError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not implemented: {message}")]
    NotImplemented { message: String, details: String },

    #[error("Image provider error: {0}")]
    ImageProvider(#[from] ImageError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// The parts of an error that reach the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
    pub details: Option<String>,
}

impl AppError {
    pub fn body(&self) -> ErrorBody {
        let (status, code, message, details) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone(), None),
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                msg.clone(),
                None,
            ),
            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone(), None)
            }
            AppError::NotImplemented { message, details } => (
                StatusCode::NOT_IMPLEMENTED,
                "NOT_IMPLEMENTED",
                message.clone(),
                Some(details.clone()),
            ),
            AppError::ImageProvider(e) => {
                let kind = e.kind();
                tracing::error!("Image provider error: {e}");
                (
                    StatusCode::from_u16(kind.status()).unwrap_or(StatusCode::BAD_GATEWAY),
                    kind.code(),
                    kind.message().to_string(),
                    Some(e.details()),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                    None,
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                    None,
                )
            }
        };

        ErrorBody {
            status,
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let ErrorBody {
            status,
            code,
            message,
            details,
        } = self.body();

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let Some(details) = details {
            error["details"] = json!(details);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let body = AppError::Validation("topic cannot be empty".to_string()).body();
        assert_eq!(body.status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "VALIDATION_ERROR");
        assert_eq!(body.details, None);
    }

    #[test]
    fn test_billing_failure_maps_to_payment_required() {
        let err = AppError::from(ImageError::Api {
            status: 400,
            code: Some("billing_hard_limit_reached".to_string()),
            message: "limit".to_string(),
        });
        let body = err.body();
        assert_eq!(body.status, StatusCode::PAYMENT_REQUIRED);
        assert_eq!(body.message, "API 사용 한도 초과");
        assert!(body.details.unwrap().contains("결제 정보"));
    }

    #[test]
    fn test_unknown_provider_failure_maps_to_bad_gateway() {
        let body = AppError::from(ImageError::EmptyResult).body();
        assert_eq!(body.status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.details.as_deref(), Some("No image URL returned from provider"));
    }
}
