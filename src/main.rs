#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::sync::Arc;

use geochat::{AppCore, api, config::ServerConfig};
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,geochat=debug".into()),
        )
        .with_target(false)
        .init();

    tracing::info!("Starting geochat server");

    let config = ServerConfig::load().expect("Failed to load configuration");
    let addr = format!("{}:{}", config.host, config.port);
    let core = Arc::new(AppCore::new(config));

    // Single-deployment setup: the frontend may be served from anywhere.
    let cors = CorsLayer::permissive();

    let app = api::router(core).layer(cors);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|err| panic!("Failed to bind to {}: {}", addr, err));

    tracing::info!("geochat listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
