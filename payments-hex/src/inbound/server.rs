//! HTTP Server configuration and startup.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    Json, Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;

use payments_types::TransactionStore;

use super::handlers::{self, AppState};
use crate::PaymentService;
use crate::openapi::ApiDoc;

/// Directory served for the browser front-end unless overridden.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// HTTP Server for the Payments API.
pub struct HttpServer<S: TransactionStore> {
    state: Arc<AppState<S>>,
    static_dir: PathBuf,
}

impl<S: TransactionStore> HttpServer<S> {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: PaymentService<S>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }

    /// Serves front-end assets from `dir` instead of `./static`.
    pub fn with_static_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.static_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Builds the Axum router with all routes.
    ///
    /// Anything not matched by an API route falls through to the static
    /// directory, where `/` resolves to `index.html`.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health::<S>))
            .route("/favicon.ico", get(handlers::favicon))
            .route(
                "/api-docs/openapi.json",
                get(|| async { Json(ApiDoc::openapi()) }),
            )
            .route("/api/payment", post(handlers::process_payment::<S>))
            .route("/api/transactions", get(handlers::list_transactions::<S>))
            .route(
                "/api/transaction/{id}",
                get(handlers::get_transaction::<S>),
            )
            .fallback_service(ServeDir::new(&self.static_dir))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
