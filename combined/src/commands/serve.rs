//! Serve command - Starts the HTTP API.

use registry_service_lib::config::RegistryConfig;
use registry_service_lib::Registry;

use common::{AppError, AppResult};

use crate::cli::ServeArgs;

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: RegistryConfig) -> AppResult<()> {
    tracing::info!("Starting server...");

    let registry = Registry::open(&config.database).await?;
    tracing::info!("Database connected");

    let mut service = config.service;
    if let Some(host) = args.host {
        service.host = host;
    }
    if let Some(port) = args.port {
        service.port = port;
    }

    gateway_lib::serve(&registry, &service)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))
}
