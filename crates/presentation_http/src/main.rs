//! Transit mock HTTP server
//!
//! Main entry point for the HTTP API server.

use std::time::Duration;

use axum::http::HeaderValue;
use infrastructure::{AppConfig, init_telemetry};
use presentation_http::{routes, server, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_telemetry(&config.telemetry)?;
    if let Some(e) = load_error {
        warn!("Failed to load config, using defaults: {}", e);
    }

    info!("Transit mock server v{} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        host = %config.server.host,
        port = %config.server.port,
        route_delay_ms = config.mock_transit.route_delay_ms,
        geo_features_delay_ms = config.mock_transit.geo_features_delay_ms,
        "Configuration loaded"
    );

    let addr = config.server.bind_address();
    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);
    let cors_layer = cors_layer(&config);

    let app = routes::create_router(AppState::from_config(config))
        .layer(TraceLayer::new_for_http());
    let app = match cors_layer {
        Some(cors) => app.layer(cors),
        None => app,
    };

    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    server::serve(listener, app, shutdown_signal(), shutdown_timeout).await?;

    info!("Server shutdown complete");

    Ok(())
}

/// CORS layer for the configured origins; `None` when CORS is disabled
fn cors_layer(config: &AppConfig) -> Option<CorsLayer> {
    if !config.server.cors_enabled {
        return None;
    }

    let layer = if config.server.allowed_origins.is_empty() {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new().allow_origin(origins)
    };

    Some(layer.allow_methods(Any).allow_headers(Any))
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
