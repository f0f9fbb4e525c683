use axum::Router;
use folio::domain::config::HostConfig;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Compose the host router: system routes first, then the compiled bundle
/// with a single page app fallback, so client-side routes deep link straight
/// into `index.html`.
pub fn init(cfg: &HostConfig) -> Router {
    let dist = &cfg.server.dist;
    let bundle = ServeDir::new(dist).not_found_service(ServeFile::new(dist.join("index.html")));

    let mut app = Router::new()
        .merge(folio::server::router::system_router())
        .fallback_service(bundle);

    if cfg.server.request_logs {
        app = app.layer(TraceLayer::new_for_http());
    }

    app
}
