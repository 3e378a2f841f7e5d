use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use axum::http::StatusCode;
use bytes::Bytes;

use crate::errors::AppError;

/// The `resume` field of a submission, read fully into memory.
pub struct ResumeField {
    pub bytes: Bytes,
    pub filename: String,
    /// Content type as declared by the client; validation happens in the
    /// handler, not here.
    pub content_type: Option<String>,
}

/// Pulls the `resume` field out of a multipart submission.
///
/// Returns `Ok(None)` when the field is absent so the handler owns the
/// no-file error. A submission so large it overruns the router's body limit
/// mid-read still maps to the documented 413; any other malformed stream
/// maps to `AppError::Internal` (the generic 500 path), matching the
/// top-level catch of the original handler.
pub async fn extract_resume_field(
    mut multipart: Multipart,
    max_bytes: usize,
) -> Result<Option<ResumeField>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| read_error(e, max_bytes))?
    {
        if field.name() != Some("resume") {
            continue;
        }

        let filename = field.file_name().unwrap_or("resume.pdf").to_string();
        let content_type = field.content_type().map(String::from);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| read_error(e, max_bytes))?;

        return Ok(Some(ResumeField {
            bytes,
            filename,
            content_type,
        }));
    }

    Ok(None)
}

/// Axum surfaces a body-limit overflow as a 413 multipart error; that is an
/// oversize upload, not a malformed stream, and keeps the `File too large`
/// contract.
fn read_error(e: MultipartError, limit: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::TooLarge { limit }
    } else {
        AppError::Internal(e.into())
    }
}
