use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Shop API entry point
///
/// Loads configuration, seeds the catalog, wires dependencies and starts the
/// HTTP server.
///
/// - config/: server address, CORS origin, catalog seed
/// - setup/: dependency injection and server setup
/// - api/: route handlers, DTOs and error mappers
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Load the initial catalog
    let seed_products = config.catalog.load_seed()?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(seed_products);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
