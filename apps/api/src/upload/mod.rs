//! Upload intake — validation and best-effort forwarding of one resume PDF.
//!
//! The whole lifecycle of an upload is one request:
//! received → validated → forwarded (best-effort) → responded.
//! Nothing is persisted; the returned `uploadId` is for display only and
//! cannot be looked up afterwards.

pub mod handlers;
mod multipart;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Body of a successful `POST /upload` response.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub filename: String,
    #[serde(rename = "uploadId")]
    pub upload_id: Uuid,
    pub timestamp: String,
}

/// Current time as an ISO-8601 string with millisecond precision and a `Z`
/// suffix (`2026-08-26T09:30:00.123Z`).
pub(crate) fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Synthesizes the display filename from a timestamp, replacing `:` and `.`
/// so the result is path-safe.
pub(crate) fn synthesize_filename(timestamp: &str) -> String {
    let sanitized: String = timestamp
        .chars()
        .map(|c| if c == ':' || c == '.' { '-' } else { c })
        .collect();
    format!("resume_{sanitized}.pdf")
}
