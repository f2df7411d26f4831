//! Server configuration loaded from environment variables.
//!
//! All settings have sensible defaults so the server can start with zero
//! configuration for local development.

use std::net::SocketAddr;
use std::time::Duration;

use chirp_catalog::client::DEFAULT_TIMEOUT;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address for the HTTP (axum) server.
    /// Env: `HTTP_ADDR`
    /// Default: `0.0.0.0:8080`
    pub http_addr: SocketAddr,

    /// Base URL of the external movie-catalog provider.
    /// Env: `CATALOG_URL`
    /// Default: `https://yts.mx/api/v2`
    pub catalog_url: String,

    /// Bound on a single catalog request, in seconds.
    /// Env: `CATALOG_TIMEOUT_SECS`
    /// Default: `10`
    pub catalog_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_addr: ([0, 0, 0, 0], 8080).into(),
            catalog_url: "https://yts.mx/api/v2".to_string(),
            catalog_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("HTTP_ADDR") {
            if let Ok(parsed) = addr.parse::<SocketAddr>() {
                config.http_addr = parsed;
            } else {
                tracing::warn!(
                    value = %addr,
                    "Invalid HTTP_ADDR, using default"
                );
            }
        }

        if let Ok(url) = std::env::var("CATALOG_URL") {
            if !url.is_empty() {
                config.catalog_url = url;
            } else {
                tracing::warn!("Empty CATALOG_URL, using default");
            }
        }

        if let Ok(secs) = std::env::var("CATALOG_TIMEOUT_SECS") {
            if let Ok(n) = secs.parse::<u64>() {
                config.catalog_timeout = Duration::from_secs(n);
            } else {
                tracing::warn!(
                    value = %secs,
                    "Invalid CATALOG_TIMEOUT_SECS, using default"
                );
            }
        }

        // RUST_LOG is handled directly by tracing-subscriber's EnvFilter,
        // so we do not store it here.

        config
    }
}
