//! System-level routes shared by host binaries.

mod health;

use axum::Router;
use axum::routing::get;

/// Router with the system endpoints (`/health`).
pub fn system_router<S>() -> Router<S>
where
    S: Send + Sync + Clone + 'static,
{
    Router::new().route("/health", get(health::health_handler))
}
