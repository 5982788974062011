//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the liveness and error page handlers
//! - Wire up middleware (request ID, tracing)
//! - Bind server to listener
//! - Stop accepting on shutdown and drain in-flight requests

use axum::{body::Body, http::Request, routing::any, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ResponderConfig;
use crate::http::handler::{error_page_handler, liveness_handler};
use crate::http::request::{request_id, UuidRequestId};
use crate::responder::Responder;

/// Path of the liveness endpoint.
pub const LIVENESS_PATH: &str = "/healthz";

/// Application state injected into handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub responder: Responder,
}

/// HTTP server for the default backend.
pub struct HttpServer {
    router: Router,
    config: ResponderConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ResponderConfig) -> Self {
        let state = AppState {
            responder: Responder::from_config(&config),
        };
        let router = build_router(state);
        Self { router, config }
    }

    /// Run the server until a shutdown signal is received.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            pages_root = %self.config.pages.root,
            cache_enabled = self.config.cache.enabled,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for serving or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ResponderConfig {
        &self.config
    }
}

/// Build the Axum router with all middleware layers.
///
/// Every path except [`LIVENESS_PATH`] reaches the error page handler,
/// whatever the method.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(LIVENESS_PATH, any(liveness_handler))
        .fallback(error_page_handler)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
                .layer(TraceLayer::new_for_http().make_span_with(
                    |request: &Request<Body>| {
                        tracing::info_span!(
                            "request",
                            request_id = %request_id(request),
                            method = %request.method(),
                            path = %request.uri().path(),
                        )
                    },
                ))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}
