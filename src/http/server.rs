//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with the admission middleware outermost
//! - Wire up middleware (tracing, request timeout)
//! - Resolve all policy scopes once, before traffic
//! - Serve with graceful shutdown
//!
//! # Design Decisions
//! - The admission check runs before the handler, per request, against
//!   policies that were resolved at load time and are shared read-only
//! - The inner handler is a plain admit page; real deployments mount
//!   `admission_middleware` on their own router instead

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, response::IntoResponse, routing::any, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{ConfigError, GuardConfig};
use crate::http::admission::{admission_middleware, AdmissionState};
use crate::routing::ScopeRouter;

/// HTTP server hosting the admission guard.
pub struct GuardServer {
    router: Router,
    config: GuardConfig,
}

impl GuardServer {
    /// Create a server, resolving every configured scope.
    ///
    /// Fails on any configuration error; a partially accepted
    /// configuration never serves traffic.
    pub fn new(config: GuardConfig) -> Result<Self, ConfigError> {
        let scopes = Arc::new(ScopeRouter::from_config(&config)?);
        let state = AdmissionState { scopes };
        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GuardConfig, state: AdmissionState) -> Router {
        Router::new()
            .route("/{*path}", any(admit_handler))
            .route("/", any(admit_handler))
            .layer(middleware::from_fn_with_state(state, admission_middleware))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.listener.request_timeout_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            sites = self.config.sites.len(),
            "HTTP server starting"
        );

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }
}

/// Inner handler for admitted requests.
async fn admit_handler() -> impl IntoResponse {
    "OK"
}
