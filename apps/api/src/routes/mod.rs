pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::upload::handlers;

/// Headroom over the file ceiling for multipart framing and the extra text
/// fields, so an upload at the ceiling is read in full and judged by the
/// handler's length check. Anything past the headroom aborts mid-read and
/// is mapped back to the same 413 in `upload::multipart`.
const BODY_LIMIT_HEADROOM: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + BODY_LIMIT_HEADROOM;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/upload", post(handlers::handle_upload))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
