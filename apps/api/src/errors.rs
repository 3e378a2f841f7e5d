use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every arm produces the caller-facing `{success, error, message}` body;
/// no unhandled fault reaches the client as anything but well-formed JSON.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("no resume file in submission")]
    NoFile,

    #[error("unsupported content type '{0}'")]
    InvalidFormat(String),

    #[error("file exceeds the {limit} byte limit")]
    TooLarge { limit: usize },

    #[error("internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            AppError::NoFile => (
                StatusCode::BAD_REQUEST,
                "No file provided",
                "Please select a resume file to upload".to_string(),
            ),
            AppError::InvalidFormat(declared) => {
                tracing::debug!("rejected upload with content type '{declared}'");
                (
                    StatusCode::BAD_REQUEST,
                    "Invalid file format",
                    "Only PDF files are allowed".to_string(),
                )
            }
            AppError::TooLarge { limit } => {
                tracing::debug!("rejected upload over the {limit} byte limit");
                (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    "File too large",
                    format!("File size must be less than {}MB", limit / (1024 * 1024)),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Upload error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Upload failed",
                    "An error occurred while processing your upload".to_string(),
                )
            }
        };

        let body = Json(json!({
            "success": false,
            "error": error,
            "message": message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_no_file_maps_to_400() {
        let response = AppError::NoFile.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "No file provided");
        assert_eq!(body["message"], "Please select a resume file to upload");
    }

    #[tokio::test]
    async fn test_invalid_format_maps_to_400() {
        let response = AppError::InvalidFormat("image/png".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Invalid file format");
        assert_eq!(body["message"], "Only PDF files are allowed");
    }

    #[tokio::test]
    async fn test_too_large_maps_to_413() {
        let response = AppError::TooLarge {
            limit: 10 * 1024 * 1024,
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let body = body_json(response).await;
        assert_eq!(body["error"], "File too large");
        assert_eq!(body["message"], "File size must be less than 10MB");
    }

    #[tokio::test]
    async fn test_too_large_message_follows_configured_limit() {
        let response = AppError::TooLarge {
            limit: 5 * 1024 * 1024,
        }
        .into_response();
        let body = body_json(response).await;
        assert_eq!(body["message"], "File size must be less than 5MB");
    }

    #[tokio::test]
    async fn test_internal_maps_to_generic_500() {
        let response =
            AppError::Internal(anyhow::anyhow!("multipart stream truncated")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Upload failed");
        // Internal detail must not leak to the caller.
        assert!(!body["message"]
            .as_str()
            .unwrap()
            .contains("multipart stream truncated"));
    }
}
