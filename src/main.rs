mod config;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    if let Err(e) = config.check_site_root() {
        tracing::warn!(error = %e, "bundle not found; only /healthz will respond");
    }

    let port = config.port;
    let site_root = config.site_root.display().to_string();
    let app = routes::app(&config);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, %site_root, "garage-sync listening");
    axum::serve(listener, app).await.expect("server failed");
}
