//! API Server - HTTP server for the prediction endpoint

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::handlers::{self, AppState};
use crate::error::Result;

/// Prediction API server
pub struct ApiServer {
    state: Arc<AppState>,
    addr: String,
}

impl ApiServer {
    /// Create a new API server around an already-loaded artifact pair.
    pub fn new(state: AppState, addr: String) -> Self {
        Self {
            state: Arc::new(state),
            addr,
        }
    }

    /// Build the router with all routes.
    pub fn router(&self) -> Router {
        // Permissive CORS so browser frontends can call the API directly.
        // Not suitable for production as-is; restrict origins there.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/health", get(handlers::health))
            .route("/predict", post(handlers::predict))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Bind and serve until the process is stopped.
    pub async fn run(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        info!("Prediction API listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}
