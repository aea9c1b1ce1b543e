// src/api/mod.rs

pub mod audit;

pub use audit::{health_handler, run_audit_handler, status_for};

use crate::models::AppState;
use axum::{routing::get, Router};
use log::info;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/audit", get(run_audit_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Serves the audit endpoints until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("🚀 Server running on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state)).await
}
