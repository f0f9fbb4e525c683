use std::sync::LazyLock;
use std::time::Instant;

use axum::http::header;
use axum::{Json, response::IntoResponse};
use serde::Serialize;

const SERVICE: &str = "folio";

/// Probe payload: enough for an uptime monitor or a load balancer check.
#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    name: &'static str,
    version: &'static str,
    /// Seconds since the first probe hit this process.
    uptime: u64,
}

static STARTED: LazyLock<Instant> = LazyLock::new(Instant::now);

impl Health {
    fn snapshot() -> Self {
        Self {
            status: "up",
            name: SERVICE,
            version: env!("CARGO_PKG_VERSION"),
            uptime: STARTED.elapsed().as_secs(),
        }
    }
}

/// Probes must never be cached, so the answer ships with no-store headers.
pub(super) async fn health_handler() -> impl IntoResponse {
    let no_cache = [
        (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
        (header::PRAGMA, "no-cache"),
    ];
    (no_cache, Json(Health::snapshot()))
}
