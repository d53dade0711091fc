use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant renders as a flat `{"error": "<message>"}` body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Could not extract text from PDF")]
    ExtractionFailed,

    #[error("Multipart error: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => {
                tracing::warn!("Rejected upload: {msg}");
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::ExtractionFailed => {
                tracing::error!("Could not extract text from PDF");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Could not extract text from PDF".to_string(),
                )
            }
            AppError::Multipart(e) => {
                tracing::warn!("Malformed multipart body: {e}");
                (e.status(), e.body_text())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_validation_is_400_with_message() {
        let (status, body) = render(AppError::Validation("No file part".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "No file part" }));
    }

    #[tokio::test]
    async fn test_extraction_failure_is_500() {
        let (status, body) = render(AppError::ExtractionFailed).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Could not extract text from PDF");
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let err = AppError::Internal(anyhow::anyhow!("disk full at /var/uploads"));
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal Server Error");
    }
}
