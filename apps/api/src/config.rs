use anyhow::{Context, Result};

/// Hard ceiling the original service enforced: 10 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Destination for forwarded uploads.
    pub webhook_url: String,
    /// Size ceiling on the uploaded file, in bytes.
    pub max_upload_bytes: usize,
    /// Accepted declared content types for the uploaded file.
    pub allowed_mime_types: Vec<String>,
    /// Timeout on the outbound webhook call, in seconds.
    pub webhook_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            webhook_url: require_env("WEBHOOK_URL")?,
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_BYTES.to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            allowed_mime_types: parse_mime_list(
                &std::env::var("ALLOWED_MIME_TYPES")
                    .unwrap_or_else(|_| "application/pdf".to_string()),
            ),
            webhook_timeout_secs: std::env::var("WEBHOOK_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<u64>()
                .context("WEBHOOK_TIMEOUT_SECS must be a number of seconds")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Splits a comma-separated MIME list, trimming whitespace and dropping
/// empty entries.
fn parse_mime_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
