use std::fs;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use folio::domain::config::HostConfig;
use folio_server::router;
use tempfile::TempDir;
use tower::ServiceExt;

fn bundle_dir() -> TempDir {
    let dist = TempDir::new().unwrap();
    fs::write(dist.path().join("index.html"), "<!doctype html><title>folio</title>").unwrap();
    fs::create_dir(dist.path().join("assets")).unwrap();
    fs::write(dist.path().join("assets/main.css"), "body{margin:0}").unwrap();
    dist
}

fn host(dist: &TempDir) -> axum::Router {
    let cfg: HostConfig = serde_json::from_value(serde_json::json!({
        "server": { "dist": dist.path(), "request_logs": false }
    }))
    .unwrap();
    router::init(&cfg)
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn health_reports_up_and_is_never_cached() {
    let dist = bundle_dir();
    let app = host(&dist);

    let response =
        app.oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store, no-cache, must-revalidate"
    );

    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["status"], "up");
    assert_eq!(body["name"], "folio");
}

#[tokio::test]
async fn the_bundle_is_served_from_dist() {
    let dist = bundle_dir();
    let app = host(&dist);

    let response = app
        .oneshot(Request::builder().uri("/assets/main.css").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "body{margin:0}");
}

#[tokio::test]
async fn unknown_paths_fall_back_to_the_spa_shell() {
    let dist = bundle_dir();
    let app = host(&dist);

    for path in ["/", "/projects/4", "/deep/client/route"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "path: {path}");
        assert!(body_text(response).await.contains("folio"), "path: {path}");
    }
}

#[tokio::test]
async fn a_missing_bundle_degrades_to_not_found() {
    let dist = TempDir::new().unwrap();
    let app = host(&dist);

    let response =
        app.oneshot(Request::builder().uri("/anything").body(Body::empty()).unwrap()).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
