//! Registry configuration.

use std::env;

use common::{DatabaseConfig, ServiceConfig};

/// Registry configuration.
#[derive(Debug, Clone, Default)]
pub struct RegistryConfig {
    /// Relational store settings
    pub database: DatabaseConfig,
    /// HTTP surface settings (used by `serve`)
    pub service: ServiceConfig,
}

impl RegistryConfig {
    /// Load configuration from environment variables.
    ///
    /// The binary loads `.env` before calling this.
    pub fn from_env() -> Self {
        let database_defaults = DatabaseConfig::default();
        let service_defaults = ServiceConfig::default();

        Self {
            database: DatabaseConfig {
                url: env::var("REGISTRY_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(database_defaults.url),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(database_defaults.max_connections),
                min_connections: database_defaults.min_connections,
            },
            service: ServiceConfig {
                service_name: service_defaults.service_name,
                host: env::var("REGISTRY_HOST").unwrap_or(service_defaults.host),
                port: env::var("REGISTRY_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(service_defaults.port),
            },
        }
    }
}
