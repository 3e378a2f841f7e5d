use std::sync::Arc;

use crate::config::Config;
use crate::webhook::ResumeForwarder;

/// Shared application state injected into all route handlers via Axum extractors.
/// Requests are stateless; everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable delivery backend. Production: `WebhookForwarder`; tests swap
    /// in recording/failing stubs.
    pub forwarder: Arc<dyn ResumeForwarder>,
}
