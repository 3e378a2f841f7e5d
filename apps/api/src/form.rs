#![allow(dead_code)] // client-side surface; exercised from tests, not main

//! Upload Form — the client-side submission state machine.
//!
//! Mirrors what the browser form does: hold one selected file, run a
//! redundant PDF pre-check on selection (the handler is the source of
//! truth), and track `idle → uploading → success | error` across a single
//! submit. No retries, no progress beyond the busy state, no cancellation
//! awareness once the request is in flight.

use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use tracing::warn;

use crate::upload::iso_timestamp;

const GENERIC_FAILURE: &str = "Upload failed. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
    Idle,
    Uploading,
    Success,
    Error,
}

/// The file currently held by the form.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

#[derive(Debug)]
pub struct UploadForm {
    status: UploadStatus,
    selected: Option<SelectedFile>,
    error_message: String,
}

impl Default for UploadForm {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadForm {
    pub fn new() -> Self {
        Self {
            status: UploadStatus::Idle,
            selected: None,
            error_message: String::new(),
        }
    }

    pub fn status(&self) -> UploadStatus {
        self.status
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    /// Takes a newly picked file. Non-PDF selections are rejected up front;
    /// this pre-check is redundant and non-authoritative.
    pub fn select_file(&mut self, name: &str, content_type: &str, bytes: Bytes) {
        if content_type == "application/pdf" {
            self.selected = Some(SelectedFile {
                name: name.to_string(),
                content_type: content_type.to_string(),
                bytes,
            });
            self.status = UploadStatus::Idle;
            self.error_message.clear();
        } else {
            self.selected = None;
            self.status = UploadStatus::Error;
            self.error_message = "Please select a PDF file only".to_string();
        }
    }

    /// Clears the form back to its initial state.
    pub fn reset(&mut self) {
        self.status = UploadStatus::Idle;
        self.selected = None;
        self.error_message.clear();
    }

    /// Submits the selected file to `endpoint` as multipart `resume` and
    /// applies the resulting transition.
    pub async fn submit(&mut self, client: &reqwest::Client, endpoint: &str) {
        let Some(file) = self.selected.clone() else {
            self.status = UploadStatus::Error;
            self.error_message = "Please select a file first".to_string();
            return;
        };

        self.status = UploadStatus::Uploading;
        self.error_message.clear();

        let part = match Part::bytes(file.bytes.to_vec())
            .file_name(file.name)
            .mime_str(&file.content_type)
        {
            Ok(part) => part,
            Err(e) => {
                warn!("Upload error: {e}");
                self.status = UploadStatus::Error;
                self.error_message = GENERIC_FAILURE.to_string();
                return;
            }
        };
        let form = Form::new()
            .part("resume", part)
            .text("timestamp", iso_timestamp());

        match client.post(endpoint).multipart(form).send().await {
            Ok(response) if response.status().is_success() => {
                self.status = UploadStatus::Success;
            }
            Ok(response) => {
                let status = response.status();
                // Prefer the server-supplied message when the body parses.
                let message = response
                    .json::<serde_json::Value>()
                    .await
                    .ok()
                    .and_then(|body| body["message"].as_str().map(String::from))
                    .unwrap_or_else(|| {
                        format!("Upload failed with status: {}", status.as_u16())
                    });
                self.status = UploadStatus::Error;
                self.error_message = message;
            }
            Err(e) => {
                warn!("Upload error: {e}");
                self.status = UploadStatus::Error;
                self.error_message = GENERIC_FAILURE.to_string();
            }
        }
    }
}
