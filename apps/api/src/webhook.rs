//! Webhook delivery — the single point of outbound HTTP in the service.
//!
//! The handler hands a validated upload to a `ResumeForwarder`; the
//! production backend re-packages it as `multipart/form-data` and POSTs it
//! once to the configured webhook URL. No retries, no authentication.
//! Delivery failure is the caller's (the handler's) problem to log or
//! swallow; this module only reports it.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

/// Constant tag sent with every forwarded upload so the webhook can tell
/// where the submission came from.
pub const SOURCE_TAG: &str = "resume-uploader";

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("webhook rejected delivery (status {status})")]
    Rejected { status: u16 },
}

/// A validated upload, ready to forward. Lives for one request only.
#[derive(Debug, Clone)]
pub struct ResumePayload {
    /// Filename as submitted by the client.
    pub filename: String,
    /// Declared content type, already validated against the allow-list.
    pub content_type: String,
    pub bytes: Bytes,
    /// ISO-8601 submission timestamp.
    pub submitted_at: String,
}

/// Delivery seam between the upload handler and the outside world.
#[async_trait]
pub trait ResumeForwarder: Send + Sync {
    /// Performs exactly one delivery attempt.
    async fn forward(&self, payload: ResumePayload) -> Result<(), DeliveryError>;
}

/// Production forwarder: one shared `reqwest::Client` with a bounded
/// request timeout, so a slow webhook cannot stall responses indefinitely.
pub struct WebhookForwarder {
    client: Client,
    url: String,
}

impl WebhookForwarder {
    pub fn new(url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl ResumeForwarder for WebhookForwarder {
    async fn forward(&self, payload: ResumePayload) -> Result<(), DeliveryError> {
        let part = Part::bytes(payload.bytes.to_vec())
            .file_name(payload.filename)
            .mime_str(&payload.content_type)?;
        let form = Form::new()
            .part("resume", part)
            .text("timestamp", payload.submitted_at)
            .text("source", SOURCE_TAG);

        let response = self.client.post(&self.url).multipart(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
            });
        }

        debug!(status = status.as_u16(), "webhook accepted resume");
        Ok(())
    }
}
