use std::error::Error;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use route_server::config::ServerConfig;
use route_server::planner::RouteEngine;
use route_server::reference::InMemoryStore;
use route_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run().await {
        error!(error = %e, "route server stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let config = ServerConfig::from_env()?;

    // Load the catalog (fail fast if a configured file is unusable)
    let store = match &config.catalog_path {
        Some(path) => InMemoryStore::from_json_path(path)?,
        None => {
            info!("no catalog configured, using bundled seed");
            InMemoryStore::seeded()
        }
    };
    info!(
        destinations = store.catalog().destinations.len(),
        visa_rules = store.catalog().visa_rules.len(),
        price_tiers = store.catalog().price_tiers.len(),
        "catalog ready"
    );

    let state = AppState::new(store, RouteEngine::default(), &config.cache);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "route planner listening");
    info!("  GET  /health              - Health check");
    info!("  POST /api/routes          - Plan route options");
    info!("  GET  /api/destinations    - List destinations (?region=)");
    info!("  GET  /api/destinations/:id - Look up a destination");
    info!("  GET  /api/regions         - List region preferences");

    axum::serve(listener, app).await?;
    Ok(())
}
