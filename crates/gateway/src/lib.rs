//! API Gateway Library
//!
//! JSON REST surface over the registry services, sharing the same
//! validation and persistence as the command-line forms.

pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use common::ServiceConfig;
use registry_service_lib::Registry;

use crate::routes::create_router;
use crate::state::AppState;

/// Build the application router with request tracing.
pub fn app(state: AppState) -> Router {
    create_router(state).layer(TraceLayer::new_for_http())
}

/// Serve the HTTP API until the process is stopped.
pub async fn serve(
    registry: &Registry,
    config: &ServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new(registry);
    let app = app(state);

    let addr: SocketAddr = config.addr().parse()?;
    info!("{} listening on {}", config.service_name, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
