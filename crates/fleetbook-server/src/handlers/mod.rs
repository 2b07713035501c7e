//! Route handlers

pub mod auth;
pub mod changes;
pub mod fleets;
pub mod tables;

use axum::http::StatusCode;
use tracing::{error, Span};

use crate::error::ApiError;

pub async fn healthz() -> &'static str {
    "ok"
}

/// Run a table load/save off the async workers
pub(crate) async fn blocking<T, F>(task: F) -> Result<T, ApiError>
where
    F: FnOnce() -> fleetbook_types::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let span = Span::current();
    match tokio::task::spawn_blocking(move || span.in_scope(task)).await {
        Ok(result) => result.map_err(ApiError::from),
        Err(e) => {
            error!(error = %e, "storage task failed");
            Err(ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"))
        }
    }
}
