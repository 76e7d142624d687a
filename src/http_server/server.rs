//! # HTTP Server
//!
//! Combines the spacecraft and health routers with CORS and request
//! tracing, and serves them until shutdown.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::spacecraft::{SpacecraftRepository, SpacecraftService};

use super::config::HttpServerConfig;
use super::routes::{health_routes, spacecraft_routes, SpacecraftState};

/// HTTP server for the spacecraft API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server exposing `service`
    pub fn new<R: SpacecraftRepository + 'static>(
        config: HttpServerConfig,
        service: SpacecraftService<R>,
    ) -> Self {
        let router = build_router(&config, Arc::new(service));
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(addr.as_str()).await?;
        info!(addr = %listener.local_addr()?, "spacecraft API listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("server stopped");
        Ok(())
    }
}

/// Build the combined router with all endpoints
pub fn build_router<R: SpacecraftRepository + 'static>(
    config: &HttpServerConfig,
    service: Arc<SpacecraftService<R>>,
) -> Router {
    let state = Arc::new(SpacecraftState::new(service, config.delete_no_content));

    Router::new()
        .merge(health_routes())
        .merge(spacecraft_routes(state))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
    let origin = if config.cors_origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    info!("shutdown signal received");
}
