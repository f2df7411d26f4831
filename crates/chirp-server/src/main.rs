//! # chirp-server
//!
//! GraphQL front door for the chirp service.
//!
//! This binary provides:
//! - the **GraphQL endpoint** (axum + async-graphql) serving queries and
//!   mutations over the in-memory store and the external movie catalog
//! - a **GraphiQL playground** on the same route for manual exploration
//! - a **health check** endpoint
//!
//! All resolution logic lives in `chirp-graphql`; this crate only wires
//! the store, the catalog client and the schema together and serves them.

mod api;
mod config;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use chirp_catalog::CatalogClient;
use chirp_store::Store;

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // -----------------------------------------------------------------------
    // 1. Initialize tracing (respects RUST_LOG env var)
    // -----------------------------------------------------------------------
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,chirp_server=debug")),
        )
        .init();

    info!("Starting chirp server v{}", env!("CARGO_PKG_VERSION"));

    // -----------------------------------------------------------------------
    // 2. Load configuration
    // -----------------------------------------------------------------------
    let config = ServerConfig::from_env();
    info!(?config, "Loaded configuration");

    // -----------------------------------------------------------------------
    // 3. Initialize subsystems
    // -----------------------------------------------------------------------

    // The store lives for the whole process; seeded, never persisted.
    let store = Arc::new(Store::seeded());

    // Catalog client with a bounded per-request timeout.
    let catalog = Arc::new(CatalogClient::new(
        config.catalog_url.clone(),
        config.catalog_timeout,
    )?);

    let schema = chirp_graphql::build_schema(store, catalog);

    // -----------------------------------------------------------------------
    // 4. Run the HTTP server (blocks until shutdown)
    // -----------------------------------------------------------------------
    tokio::select! {
        result = api::serve(schema, config.http_addr) => {
            if let Err(e) = result {
                tracing::error!(error = %e, "HTTP server failed");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down");
        }
    }

    Ok(())
}
