use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::{error, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::upload::multipart::extract_resume_field;
use crate::upload::{iso_timestamp, synthesize_filename, UploadResponse};
use crate::webhook::ResumePayload;

/// POST /upload
///
/// Validates the `resume` field (presence, declared type, size), forwards
/// the bytes to the configured webhook exactly once, and returns a
/// confirmation. Resubmitting the same file yields a fresh `uploadId` and a
/// fresh delivery attempt; there is no dedup and no idempotency.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let field = extract_resume_field(multipart, state.config.max_upload_bytes)
        .await?
        .ok_or(AppError::NoFile)?;

    let declared = field.content_type.clone().unwrap_or_default();
    if !state.config.allowed_mime_types.iter().any(|m| *m == declared) {
        return Err(AppError::InvalidFormat(declared));
    }

    if field.bytes.len() > state.config.max_upload_bytes {
        return Err(AppError::TooLarge {
            limit: state.config.max_upload_bytes,
        });
    }

    let payload = ResumePayload {
        filename: field.filename,
        content_type: declared,
        bytes: field.bytes,
        submitted_at: iso_timestamp(),
    };

    // Delivery failure is swallowed on purpose: the caller-facing contract
    // is "accepted for processing", not "delivered downstream". Known risk.
    if let Err(e) = state.forwarder.forward(payload).await {
        error!("Webhook delivery failed: {e}");
    }

    let filename = synthesize_filename(&iso_timestamp());
    let upload_id = Uuid::new_v4();
    info!(%upload_id, %filename, "resume accepted");

    Ok(Json(UploadResponse {
        success: true,
        message: "Resume uploaded successfully".to_string(),
        filename,
        upload_id,
        timestamp: iso_timestamp(),
    }))
}
