//! A small static site server with colored request tracing.
//!
//! Features:
//! - Serves a static site directory (index.html resolution, MIME detection)
//! - Fixed JSON liveness endpoint at /api/health
//! - Detailed logging with color-coded request IDs and latency tracking
//! - Response compression

use axum::{Router, middleware, routing::get};
use site_rs::{
    cli::Cli,
    config,
    handlers::{health, serve_static},
    middleware::log_requests,
    state::AppState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tracing::{Level, error, info};

/// Main entry point that configures and runs the site server
///
/// Sets up:
/// - Structured logging
/// - Port and static-root resolution
/// - The health route and static fallback
/// - Request logging middleware and response compression
#[tokio::main]
async fn main() {
    // Initialize structured logging with INFO level as default
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let args: Cli = argh::from_env();
    let port = config::resolve_port(args.port);

    // The static root is a validated input: a missing directory is a launch
    // failure, not a latent source of 404s.
    let static_dir = match args.static_dir.canonicalize() {
        Ok(dir) => dir,
        Err(e) => {
            error!("Static root {:?} is not usable: {}", args.static_dir, e);
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState {
        static_dir: static_dir.clone(),
    });

    // The health route is registered before the fallback so a file named
    // api/health under the static root can never shadow it.
    let app = Router::new()
        .route("/api/health", get(health))
        .fallback(get(serve_static))
        .layer(middleware::from_fn(log_requests))
        .layer(CompressionLayer::new())
        .with_state(state);

    let addr = SocketAddr::new(args.host, port);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Log startup information
    info!("Serving static files from: {:?}", static_dir);
    info!("Server running on: http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
