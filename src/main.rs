use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use shelf_core::{
    config::{assets_dir_from_env_value, resolve_catalog_path},
    Catalog, CatalogQuery, CoreConfig, DEFAULT_REST_ADDR,
};

/// Main entry point for the Shelf application
///
/// Loads the book catalogue once, then serves the REST API (listing, detail, health, static
/// assets and Swagger UI) until the process is stopped.
///
/// # Environment Variables
/// - `SHELF_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `SHELF_CATALOG_PATH`: Catalogue YAML file (default: search for `catalog/books.yaml`)
/// - `SHELF_ASSETS_DIR`: Static assets directory (default: "assets")
///
/// Variables may also be supplied through a `.env` file in the working directory.
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, catalogue loading or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("shelf_run=info".parse()?)
                .add_directive("shelf_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr: SocketAddr = std::env::var("SHELF_REST_ADDR")
        .unwrap_or_else(|_| DEFAULT_REST_ADDR.into())
        .parse()?;

    let catalog_override = std::env::var("SHELF_CATALOG_PATH")
        .ok()
        .map(PathBuf::from);
    let cfg = Arc::new(CoreConfig::new(
        resolve_catalog_path(catalog_override)?,
        assets_dir_from_env_value(std::env::var("SHELF_ASSETS_DIR").ok()),
    )?);

    let catalog = Catalog::load(cfg.catalog_path())?;
    if catalog.is_empty() {
        tracing::warn!("catalogue {} has no books", cfg.catalog_path().display());
    }
    let query = CatalogQuery::new(Arc::new(catalog));

    tracing::info!("++ Starting Shelf REST on {}", rest_addr);

    let app = router(AppState::new(query, cfg));
    let listener = tokio::net::TcpListener::bind(rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
