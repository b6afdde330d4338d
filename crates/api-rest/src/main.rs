//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! This binary is useful for development and debugging. The workspace's main `shelf-run` binary
//! additionally loads a `.env` file before starting the same router.

use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use shelf_core::{
    config::{assets_dir_from_env_value, resolve_catalog_path},
    Catalog, CatalogQuery, CoreConfig, DEFAULT_REST_ADDR,
};

/// Main entry point for the Shelf REST API server
///
/// # Environment Variables
/// - `SHELF_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `SHELF_CATALOG_PATH`: Catalogue YAML file (default: search for `catalog/books.yaml`)
/// - `SHELF_ASSETS_DIR`: Static assets directory (default: "assets")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the catalogue cannot be located or loaded,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("shelf_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("SHELF_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());

    let catalog_override = std::env::var("SHELF_CATALOG_PATH")
        .ok()
        .map(PathBuf::from);
    let catalog_path = resolve_catalog_path(catalog_override)?;
    let assets_dir = assets_dir_from_env_value(std::env::var("SHELF_ASSETS_DIR").ok());

    let cfg = Arc::new(CoreConfig::new(catalog_path, assets_dir)?);
    let catalog = Catalog::load(cfg.catalog_path())?;
    let query = CatalogQuery::new(Arc::new(catalog));

    tracing::info!("-- Starting Shelf REST API on {}", addr);

    let app = router(AppState::new(query, cfg));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
