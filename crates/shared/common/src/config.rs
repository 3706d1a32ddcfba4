//! Shared configuration structures.

use serde::{Deserialize, Serialize};

/// Base service configuration for the HTTP surface.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl ServiceConfig {
    /// Get the full bind address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "school-registry".to_string(),
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// Private in-memory SQLite database (tests, throwaway sessions).
    ///
    /// Pinned to a single connection: every SQLite connection to `:memory:`
    /// opens its own empty database.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://registry.db?mode=rwc".to_string(),
            max_connections: 5,
            min_connections: 1,
        }
    }
}
