//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client is a history-mode single-page app, so any path that is not a
//! file in the bundle is answered with `index.html` and routed client-side.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Static bundle + SPA fallback + health check.
pub fn app(config: &ServerConfig) -> Router {
    let bundle = ServeDir::new(&config.site_root).fallback(ServeFile::new(config.index_html()));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(bundle)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
