use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;

const INDEX: &str = "<!DOCTYPE html><html><body></body></html>";

fn bundle() -> (tempfile::TempDir, ServerConfig) {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
    std::fs::write(dir.path().join("garage-client.js"), "export default 1;").unwrap();
    let config = ServerConfig { port: 0, site_root: dir.path().to_path_buf() };
    (dir, config)
}

async fn get_body(config: &ServerConfig, uri: &str) -> (StatusCode, String) {
    let resp = app(config)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn healthz_is_ok() {
    let (_dir, config) = bundle();
    let (status, _) = get_body(&config, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn root_serves_index() {
    let (_dir, config) = bundle();
    let (status, body) = get_body(&config, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX);
}

#[tokio::test]
async fn client_routes_fall_back_to_index() {
    let (_dir, config) = bundle();
    for uri in ["/dashboard", "/login?to=%2Fdashboard", "/does-not-exist"] {
        let (status, body) = get_body(&config, uri).await;
        assert_eq!(status, StatusCode::OK, "status for {uri}");
        assert_eq!(body, INDEX, "body for {uri}");
    }
}

#[tokio::test]
async fn bundle_assets_are_served() {
    let (_dir, config) = bundle();
    let (status, body) = get_body(&config, "/garage-client.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "export default 1;");
}
